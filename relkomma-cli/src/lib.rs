//! relkomma CLI library
//!
//! This library provides the command-line interface for the relkomma
//! relative clause comma checker.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
