//! Dispatch table mapping each conversion kind to its function.

use crate::case::{camel_case, kebab_case, lower_case, snake_case, title_case, upper_case};
use crate::error::ConversionError;
use crate::kind::ConversionKind;
use std::fmt;

/// A pure text conversion.
pub type ConversionFn = fn(&str) -> String;

/// Ordered, read-only mapping from [`ConversionKind`] to [`ConversionFn`].
///
/// The process-wide instance is a `static` built at compile time; it is
/// never mutated and may be shared freely between threads.
pub struct ConversionTable {
    entries: [(ConversionKind, ConversionFn); ConversionKind::COUNT],
}

static GLOBAL_TABLE: ConversionTable = ConversionTable::new();

impl ConversionTable {
    const fn new() -> Self {
        Self {
            entries: [
                (ConversionKind::UpperCase, upper_case),
                (ConversionKind::LowerCase, lower_case),
                (ConversionKind::CamelCase, camel_case),
                (ConversionKind::SnakeCase, snake_case),
                (ConversionKind::KebabCase, kebab_case),
                (ConversionKind::TitleCase, title_case),
            ],
        }
    }

    /// The shared conversion table.
    pub fn global() -> &'static ConversionTable {
        &GLOBAL_TABLE
    }

    /// Function for a known kind.
    pub fn get(&self, kind: ConversionKind) -> ConversionFn {
        // Entries follow `ConversionKind::ALL`, which follows discriminant order.
        self.entries[kind as usize].1
    }

    /// Function for a loosely-typed identifier.
    pub fn lookup(&self, name: &str) -> Result<ConversionFn, ConversionError> {
        let kind: ConversionKind = name.parse()?;
        Ok(self.get(kind))
    }

    /// Iterate over `(kind, function)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ConversionKind, ConversionFn)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConversionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(kind, _)| kind))
            .finish()
    }
}
