//! Public configuration surface

mod config;

pub use config::{Config, ConfigBuilder, RuleSection, Variant};
