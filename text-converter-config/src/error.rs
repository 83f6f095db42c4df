//! Typed error variants for the text-converter-config crate.
//!
//! `Config::load` and `Config::save` return `anyhow::Result`; callers that
//! want to match on a specific failure can downcast to [`ConfigError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use text_converter_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML, or YAML naming an unknown
    /// conversion kind.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
