//! The closed set of conversion kinds and their identifiers.

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available casing conversions.
///
/// Serialized as the command identifier returned by [`ConversionKind::id`];
/// deserialized through [`FromStr`], so config files may use any of the
/// accepted spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ConversionKind {
    UpperCase,
    LowerCase,
    CamelCase,
    SnakeCase,
    KebabCase,
    TitleCase,
}

impl ConversionKind {
    /// Number of conversion kinds.
    pub const COUNT: usize = 6;

    /// All conversion kinds in display order.
    ///
    /// The order matches the declaration order of the variants, so
    /// `ALL[kind as usize] == kind` for every kind.
    pub const ALL: [ConversionKind; Self::COUNT] = [
        Self::UpperCase,
        Self::LowerCase,
        Self::CamelCase,
        Self::SnakeCase,
        Self::KebabCase,
        Self::TitleCase,
    ];

    /// Stable command identifier, used by hosts to register one command per kind.
    pub fn id(self) -> &'static str {
        match self {
            Self::UpperCase => "toUpperCase",
            Self::LowerCase => "toLowerCase",
            Self::CamelCase => "toCamelCase",
            Self::SnakeCase => "toSnakeCase",
            Self::KebabCase => "toKebabCase",
            Self::TitleCase => "toTitleCase",
        }
    }

    /// Display name for command palettes and menus.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::UpperCase => "UPPERCASE",
            Self::LowerCase => "lowercase",
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snake_case",
            Self::KebabCase => "kebab-case",
            Self::TitleCase => "Title Case",
        }
    }

    /// Short description of what the conversion does.
    pub fn description(self) -> &'static str {
        match self {
            Self::UpperCase => "Convert all characters to uppercase",
            Self::LowerCase => "Convert all characters to lowercase",
            Self::CamelCase => "Join words, capitalizing all but the first (helloWorld)",
            Self::SnakeCase => "Lowercase words joined with underscores (hello_world)",
            Self::KebabCase => "Lowercase words joined with hyphens (hello-world)",
            Self::TitleCase => "Capitalize the first letter of each word",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Self::UpperCase => "UpperCase",
            Self::LowerCase => "LowerCase",
            Self::CamelCase => "CamelCase",
            Self::SnakeCase => "SnakeCase",
            Self::KebabCase => "KebabCase",
            Self::TitleCase => "TitleCase",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::UpperCase => "upper",
            Self::LowerCase => "lower",
            Self::CamelCase => "camel",
            Self::SnakeCase => "snake",
            Self::KebabCase => "kebab",
            Self::TitleCase => "title",
        }
    }

    /// Check whether `name` is one of the accepted spellings of this kind.
    ///
    /// Matching is ASCII case-insensitive.
    pub fn matches_name(self, name: &str) -> bool {
        [self.id(), self.variant_name(), self.short_name()]
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ConversionKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.matches_name(name))
            .ok_or_else(|| ConversionError::UnknownConversionKind(s.to_string()))
    }
}

impl TryFrom<String> for ConversionKind {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConversionKind> for &'static str {
    fn from(kind: ConversionKind) -> Self {
        kind.id()
    }
}
