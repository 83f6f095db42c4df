//! Case conversion algorithms and the word-boundary heuristics they share.
//!
//! A word boundary is either a run of separators (whitespace, `-`, `_`) or a
//! lowercase-to-uppercase transition between two adjacent characters.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Runs of whitespace, replaced by a single separator in snake/kebab case.
static WHITESPACE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Title Case tokens: a word character followed by any non-whitespace.
static TITLE_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn whitespace_run_regex() -> &'static Regex {
    WHITESPACE_RUN_REGEX
        .get_or_init(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"))
}

fn title_token_regex() -> &'static Regex {
    TITLE_TOKEN_REGEX
        .get_or_init(|| Regex::new(r"\w\S*").expect("Failed to compile title token regex"))
}

/// Whether `c` separates words.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Whether a word boundary falls between `prev` and `cur` (`aB`).
pub fn is_case_boundary(prev: char, cur: char) -> bool {
    prev.is_lowercase() && cur.is_uppercase()
}

/// Insert `separator` at every lowercase-to-uppercase transition.
fn insert_case_boundaries(input: &str, separator: char) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / 4);
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if prev.is_some_and(|p| is_case_boundary(p, c)) {
            result.push(separator);
        }
        result.push(c);
        prev = Some(c);
    }
    result
}

pub(crate) fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

pub(crate) fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// Convert to camelCase.
///
/// Separator runs are dropped. A word starts after a separator run or at a
/// lowercase-to-uppercase transition, and its first letter is uppercased
/// only when the last character written is lowercase: that is the only place
/// a later pass can still see the boundary. Everything else is lowercased,
/// so the first word is always lowercase and the output is a fixed point.
pub(crate) fn camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    let mut after_separator = false;

    for c in input.chars() {
        if is_word_separator(c) {
            after_separator = true;
        } else {
            let starts_word = after_separator || prev.is_some_and(|p| is_case_boundary(p, c));
            let after_lowercase = result.chars().next_back().is_some_and(char::is_lowercase);
            if starts_word && after_lowercase {
                // Multi-char mappings (`ß` -> `SS`) keep only the first letter upper.
                let mut upper = c.to_uppercase();
                result.extend(upper.next());
                result.extend(upper.flat_map(char::to_lowercase));
            } else {
                result.extend(c.to_lowercase());
            }
            after_separator = false;
        }
        prev = Some(c);
    }
    result
}

/// Shared body of snake_case and kebab-case.
fn separated_case(input: &str, separator: char) -> String {
    let bounded = insert_case_boundaries(input, separator);
    let mut buf = [0u8; 4];
    let separator: &str = separator.encode_utf8(&mut buf);
    whitespace_run_regex()
        .replace_all(&bounded, separator)
        .to_lowercase()
}

/// Convert to snake_case. Existing `-` characters are kept.
pub(crate) fn snake_case(input: &str) -> String {
    separated_case(input, '_')
}

/// Convert to kebab-case. Existing `_` characters are kept.
pub(crate) fn kebab_case(input: &str) -> String {
    separated_case(input, '-')
}

/// Uppercase the first character of `word` and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let mut result = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        for c in chars {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Convert words to Title Case, leaving the text between words untouched.
pub(crate) fn title_case(input: &str) -> String {
    title_token_regex()
        .replace_all(input, |caps: &Captures<'_>| capitalize(&caps[0]))
        .into_owned()
}
