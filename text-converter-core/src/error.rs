//! Typed error type for text-converter-core.

use thiserror::Error;

/// Errors surfaced by the conversion engine.
///
/// The only failure is an identifier outside the closed set of conversion
/// kinds. Callers that hold a [`ConversionKind`](crate::ConversionKind) can
/// never hit it; it only fires where a loosely-typed name (a command id, a
/// config string, a CLI argument) is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The identifier does not name any known conversion.
    #[error("unknown conversion kind: '{0}'")]
    UnknownConversionKind(String),
}
