//! The host collaborator seam.

use super::document::TextDocument;

/// Message shown when a command runs with no document open.
pub const NO_ACTIVE_EDITOR_MESSAGE: &str = "No active editor";

/// What command execution needs from an editor-like host.
///
/// A real editor binding implements this over its own buffers; the
/// [`InMemoryWorkspace`] implementation backs the CLI and the tests.
pub trait Workspace {
    /// The document that has focus, if any.
    fn active_document(&mut self) -> Option<&mut TextDocument>;

    /// Report a user-facing failure.
    fn show_error_message(&mut self, message: &str);
}

/// A workspace holding at most one open document.
#[derive(Debug, Default)]
pub struct InMemoryWorkspace {
    document: Option<TextDocument>,
    error_messages: Vec<String>,
}

impl InMemoryWorkspace {
    /// Create a workspace with no open document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with `document` open.
    pub fn with_document(document: TextDocument) -> Self {
        Self {
            document: Some(document),
            error_messages: Vec::new(),
        }
    }

    /// Open `document`, returning the previously open one.
    pub fn open(&mut self, document: TextDocument) -> Option<TextDocument> {
        self.document.replace(document)
    }

    /// Close the open document and return it.
    pub fn close(&mut self) -> Option<TextDocument> {
        self.document.take()
    }

    pub fn document(&self) -> Option<&TextDocument> {
        self.document.as_ref()
    }

    /// Messages passed to [`Workspace::show_error_message`], oldest first.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }
}

impl Workspace for InMemoryWorkspace {
    fn active_document(&mut self) -> Option<&mut TextDocument> {
        self.document.as_mut()
    }

    fn show_error_message(&mut self, message: &str) {
        log::warn!("Workspace error: {message}");
        self.error_messages.push(message.to_string());
    }
}
