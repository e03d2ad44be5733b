//! Error types for the symbol table

use thiserror::Error;

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("Unknown symbol set: '{0}'")]
    UnknownSet(String),

    #[error("Unknown catalog target: '{0}'")]
    UnknownTarget(String),

    #[error("Symbol set '{set}' contains an entry with an empty character")]
    EmptyCharacter { set: String },

    #[error("Symbol set '{set}' has an empty label for '{character}'")]
    EmptyLabel { set: String, character: String },
}
