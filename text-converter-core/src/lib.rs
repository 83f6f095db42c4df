//! Casing-conversion engine for text-converter.
//!
//! Converts a text fragment between common lexical casing conventions:
//! UPPERCASE, lowercase, camelCase, snake_case, kebab-case and Title Case.
//! Every conversion is a pure `&str -> String` function; the engine holds no
//! mutable state and performs no I/O.
//!
//! Callers holding a [`ConversionKind`] use [`convert`], which cannot fail.
//! Callers holding a loosely-typed identifier (a command id, a config value)
//! use [`convert_named`], which rejects unknown names with
//! [`ConversionError::UnknownConversionKind`].

mod case;
mod error;
mod kind;
mod table;

#[cfg(test)]
mod tests;

pub use case::{is_case_boundary, is_word_separator};
pub use error::ConversionError;
pub use kind::ConversionKind;
pub use table::{ConversionFn, ConversionTable};

/// Apply a conversion to the input text.
pub fn convert(kind: ConversionKind, text: &str) -> String {
    log::trace!("Converting {} bytes with {:?}", text.len(), kind);
    ConversionTable::global().get(kind)(text)
}

/// Apply the conversion named by `name` to the input text.
///
/// Returns `Err` without producing any output if `name` is not one of the
/// accepted spellings of a [`ConversionKind`].
pub fn convert_named(name: &str, text: &str) -> Result<String, ConversionError> {
    let kind: ConversionKind = name.parse().inspect_err(|e| {
        log::warn!("Rejected conversion request: {e}");
    })?;
    Ok(convert(kind, text))
}
