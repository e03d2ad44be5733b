//! Bundled character tables

pub mod emoji;
pub mod symbols;
