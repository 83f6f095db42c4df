//! Editor host integration.
//!
//! The conversion engine only maps strings to strings. This module supplies
//! the surrounding editor plumbing: documents with multiple selections, a
//! [`Workspace`] seam for the host, and a [`CommandRegistry`] that exposes one
//! command per conversion kind and applies it to every selected range.
//!
//! # Sub-modules
//!
//! - [`commands`]: command registration, execution, and one-shot conversion
//! - [`document`]: `TextDocument` and `Selection`
//! - [`workspace`]: the `Workspace` trait and an in-memory implementation

pub mod commands;
pub mod document;
mod error;
pub mod workspace;

pub use commands::{
    CommandRegistry, ExecutionReport, RegisteredCommand, apply_conversion, run_conversion,
};
pub use document::{Selection, TextDocument};
pub use error::HostError;
pub use workspace::{InMemoryWorkspace, NO_ACTIVE_EDITOR_MESSAGE, Workspace};
