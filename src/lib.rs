// Library interface for symbolcopy
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod plugins;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::catalog::{ActionDescriptor, CatalogAdapter, CatalogItem, SymbolTarget};
pub use crate::core::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use crate::core::error::{SymbolError, SymbolResult};
pub use crate::core::plugin::{Plugin, PluginRegistry};
pub use crate::core::table::{SymbolEntry, SymbolSet, SymbolTable};
