// Library exports for testing and for hosts embedding the command layer.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod host;

/// Conversion engine re-export.
pub use text_converter_core as engine;
/// Configuration re-export.
pub use text_converter_config as config;
