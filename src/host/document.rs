//! In-memory text document with multiple selections.

use super::error::HostError;
use std::fmt;

/// A byte range into a document.
///
/// Offsets must fall on UTF-8 character boundaries; [`TextDocument::get_text`]
/// rejects ranges that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection; the offsets may be given in either order.
    pub fn new(anchor: usize, active: usize) -> Self {
        Self {
            start: anchor.min(active),
            end: anchor.max(active),
        }
    }

    /// A zero-width selection (a cursor) at `offset`.
    pub fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A document's text plus its ordered selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    selections: Vec<Selection>,
}

impl TextDocument {
    /// Create a document with no selections.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selections: Vec::new(),
        }
    }

    /// Builder-style variant of [`set_selections`](Self::set_selections).
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    /// Replace all selections with one covering the whole text.
    pub fn select_all(&mut self) {
        self.selections = vec![Selection::new(0, self.text.len())];
    }

    /// Replace all selections with one per non-empty line.
    ///
    /// Line terminators (`\n`, `\r\n`) are excluded from the selections.
    pub fn select_lines(&mut self) {
        let mut selections = Vec::new();
        let mut offset = 0;
        for line in self.text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\n', '\r']);
            if !content.is_empty() {
                selections.push(Selection::new(offset, offset + content.len()));
            }
            offset += line.len();
        }
        self.selections = selections;
    }

    /// Text covered by `selection`.
    pub fn get_text(&self, selection: Selection) -> Result<&str, HostError> {
        self.text
            .get(selection.start..selection.end)
            .ok_or(HostError::InvalidSelection {
                selection,
                len: self.text.len(),
            })
    }

    /// Replace the text of several ranges in one edit.
    ///
    /// Every range is validated before anything changes, so on error the
    /// document is untouched. Repeated edits of the same range with the same
    /// replacement collapse into one; any other overlap is rejected. Afterwards each edited selection covers its
    /// replacement text and every other selection is shifted to stay on the
    /// same surrounding text.
    pub fn replace_selections(&mut self, mut edits: Vec<(Selection, String)>) -> Result<(), HostError> {
        for (selection, _) in &edits {
            self.get_text(*selection)?;
        }

        edits.sort();
        edits.dedup();
        for pair in edits.windows(2) {
            let (first, second) = (pair[0].0, pair[1].0);
            if first.end > second.start || first == second {
                return Err(HostError::OverlappingSelections { first, second });
            }
        }

        let mut text = String::with_capacity(self.text.len());
        let mut moved = Vec::with_capacity(edits.len());
        let mut cursor = 0;
        for (old, replacement) in &edits {
            text.push_str(&self.text[cursor..old.start]);
            let start = text.len();
            text.push_str(replacement);
            moved.push((*old, Selection::new(start, text.len())));
            cursor = old.end;
        }
        text.push_str(&self.text[cursor..]);

        self.text = text;
        for selection in &mut self.selections {
            *selection = match moved.iter().find(|(old, _)| old == selection) {
                Some((_, new)) => *new,
                None => Selection::new(
                    map_offset(&moved, selection.start),
                    map_offset(&moved, selection.end),
                ),
            };
        }
        Ok(())
    }
}

/// Map a pre-edit offset to its post-edit position.
///
/// `moved` holds `(old, new)` ranges sorted by position. Offsets inside an
/// edited range are clamped into its replacement.
fn map_offset(moved: &[(Selection, Selection)], offset: usize) -> usize {
    let mut mapped = offset;
    for (old, new) in moved {
        if offset >= old.end {
            mapped = new.end + (offset - old.end);
        } else if offset > old.start {
            return new.start + (offset - old.start).min(new.len());
        } else {
            break;
        }
    }
    mapped
}
