//! Configuration system for text-converter.
//!
//! This crate provides configuration loading, saving, and default values
//! for the editor host integration:
//!
//! - Command id prefix used when registering conversion commands
//! - Which conversions are exposed as commands
//! - Debug log level

pub mod config;
mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
