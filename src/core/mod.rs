//! Core of the symbol catalog: the table, the catalog adapter and the host contract

pub mod auto_register;
pub mod catalog;
pub mod clipboard;
pub mod config_schema;
pub mod error;
pub mod plugin;
pub mod table;
