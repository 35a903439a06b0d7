//! Language-specific lexical tables
//!
//! Tables are described in TOML, embedded in the binary and compiled once.

pub mod config;
pub mod interface;
pub mod loader;
pub mod tables;

pub use interface::Lexicon;
pub use loader::get_tables;
pub use tables::LanguageTables;
