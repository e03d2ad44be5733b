use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use clap_mangen::Man;
use std::io;
use time::format_description::OwnedFormatItem;
use tracing::{info, warn};

use symbolcopy::cli::commands::handle_command;
use symbolcopy::cli::{Args, Commands};
use symbolcopy::config::{Config, DEFAULT_TIME_FORMAT};
use symbolcopy::core::plugin::PluginRegistry;
use symbolcopy::plugins::register_builtin;

fn parse_time_format(time_format: &str) -> Result<OwnedFormatItem> {
    let items = time::format_description::parse(time_format)
        .with_context(|| format!("Invalid time format '{time_format}'"))?;
    Ok(OwnedFormatItem::from(items))
}

fn create_subscriber(
    verbose: bool,
    time_format: &str,
) -> Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let format_desc = match parse_time_format(time_format) {
        Ok(format_desc) => format_desc,
        Err(e) => {
            eprintln!("{e:#}. Using default format.");
            parse_time_format(DEFAULT_TIME_FORMAT)?
        }
    };

    Ok(Box::new(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
            .finish(),
    ))
}

fn print_info() {
    println!("🔧 symbolcopy v{}", env!("CARGO_PKG_VERSION"));
    println!("📝 {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("🌐 Repository: {}", env!("CARGO_PKG_REPOSITORY"));
    println!("📄 License: {}", env!("CARGO_PKG_LICENSE"));
    println!();
    println!("📦 Catalog:");
    println!("  • Symbols: arrows, math, punctuation, Greek letters and more");
    println!("  • Emoji: enable with enable_emoji = true under [plugins.symbols]");
    println!();
    println!("🚀 Usage:");
    println!("   symbolcopy catalog                       # List keywords");
    println!("   symbolcopy suggest Symbols arrow         # Browse matches");
    println!("   symbolcopy copy Symbols rightwards arrow # Copy the best match");
    println!("   Use --help for detailed options");
    println!();
    println!("🔧 Shell Completions:");
    println!("   symbolcopy --completions bash > /usr/local/etc/bash_completion.d/symbolcopy");
    println!("   symbolcopy --completions zsh > ~/.zfunc/_symbolcopy");
    println!("   symbolcopy --completions fish > ~/.config/fish/completions/symbolcopy.fish");
    println!();
    println!("📖 Man Page:");
    println!("   symbolcopy --man > /usr/local/share/man/man1/symbolcopy.1");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --completions flag early
    if let Some(shell) = args.completions {
        let mut app = Args::command();
        generate(shell, &mut app, "symbolcopy", &mut io::stdout());
        return Ok(());
    }

    // Handle --man flag early
    if args.man {
        let app = Args::command();
        let man = Man::new(app);
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    if args.info {
        print_info();
        return Ok(());
    }

    if args.schema {
        println!("{}", Config::schema_json()?);
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        Config::load_from_file(Config::expand_path(config_path)?).await?
    } else {
        Config::load().await?
    };

    let verbose = args.verbose || config.is_verbose_default();
    let subscriber = create_subscriber(verbose, &config.get_time_format())?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set default subscriber")?;

    if let Some(config_path) = &args.config {
        info!("📋 Using custom config file: {}", config_path.display());
    }

    let mut registry = PluginRegistry::discover_plugins();
    register_builtin(&mut registry);

    for (name, e) in registry.start_all(&config) {
        warn!("Plugin '{}' runs with its previous settings: {:#}", name, e);
    }

    let command = args.command.unwrap_or(Commands::Catalog);
    handle_command(command, &registry, &mut io::stdout())
}
