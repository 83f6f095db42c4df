//! Errors raised by the host integration layer.

use super::document::Selection;
use text_converter_core::ConversionError;
use thiserror::Error;

/// Failure modes of command execution against a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No document is open to convert.
    #[error("No active editor")]
    NoActiveEditor,

    /// The command id is not registered.
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// A selection lies outside the document or splits a UTF-8 character.
    #[error("selection {selection} is not a valid range in a document of {len} bytes")]
    InvalidSelection { selection: Selection, len: usize },

    /// Two selections cover overlapping text, so they cannot both be replaced.
    #[error("selections {first} and {second} overlap")]
    OverlappingSelections { first: Selection, second: Selection },

    /// The conversion named by a command could not be resolved.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
