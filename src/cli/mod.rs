//! Command line host for the symbol catalog

pub mod commands;
pub mod matcher;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::core::catalog::ACTION_COPY;

#[derive(Parser, Debug)]
#[command(name = "symbolcopy")]
#[command(about = "Find a Unicode symbol or emoji by name and copy it to the clipboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,

    /// Generate man page
    #[arg(long)]
    pub man: bool,

    /// Show detailed information about the tool
    #[arg(long)]
    pub info: bool,

    /// Print the JSON schema of the configuration file
    #[arg(long)]
    pub schema: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the top-level catalog entries of every plugin
    Catalog,

    /// Show the suggestions a keyword offers for the given filter
    Suggest {
        /// Keyword to drill into, by title or target (e.g. "Symbols")
        keyword: String,

        /// Filter text matched against symbol and name
        #[arg(required = true, num_args = 1..)]
        filter: Vec<String>,

        /// Maximum number of suggestions to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Copy the best matching symbol to the clipboard
    Copy {
        /// Keyword to drill into, by title or target (e.g. "Symbols")
        keyword: String,

        /// Filter text matched against symbol and name
        #[arg(required = true, num_args = 1..)]
        filter: Vec<String>,

        /// Action to run on the selected symbol
        #[arg(short, long, default_value = ACTION_COPY)]
        action: String,

        /// Print the symbol instead of writing the system clipboard
        #[arg(short, long)]
        print: bool,
    },

    /// List the actions each plugin offers
    Actions,

    /// List registered plugins
    Plugins,
}
