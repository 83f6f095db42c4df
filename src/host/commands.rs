//! Command registration and execution.
//!
//! One command is registered per enabled conversion kind, under the id
//! `"{prefix}.{kind.id()}"`. Executing a command converts the text of every
//! non-empty selection in the active document and replaces it in one edit.

use super::document::TextDocument;
use super::error::HostError;
use super::workspace::{InMemoryWorkspace, NO_ACTIVE_EDITOR_MESSAGE, Workspace};
use text_converter_config::Config;
use text_converter_core::{ConversionKind, convert};

/// A conversion exposed to the host as an invocable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    /// Fully qualified command id (`text-converter.toSnakeCase`).
    pub id: String,
    pub kind: ConversionKind,
    /// Title for command palettes (`Text Converter: snake_case`).
    pub title: String,
}

/// Counts from one command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    pub kind: ConversionKind,
    /// Selections whose text was replaced.
    pub converted: usize,
    /// Empty selections left untouched.
    pub skipped: usize,
}

/// Registry of conversion commands keyed by command id.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    prefix: String,
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Create an empty registry whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: Vec::new(),
        }
    }

    /// Build a registry with one command per enabled conversion, in config order.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new(config.command_prefix.clone());

        log::info!(
            "Building command registry from {} enabled conversions",
            config.enabled_conversions.len()
        );
        for &kind in &config.enabled_conversions {
            registry.register(kind);
        }

        log::info!(
            "Command registry initialized with {} commands",
            registry.commands.len()
        );
        registry
    }

    /// Register the command for `kind`. Registering a kind twice is a no-op.
    pub fn register(&mut self, kind: ConversionKind) -> &RegisteredCommand {
        let index = match self.commands.iter().position(|c| c.kind == kind) {
            Some(index) => {
                log::warn!("Conversion {:?} is already registered", kind);
                index
            }
            None => {
                let command = RegisteredCommand {
                    id: self.command_id(kind),
                    kind,
                    title: format!("Text Converter: {}", kind.display_name()),
                };
                log::debug!("Registered command: {} -> {:?}", command.id, kind);
                self.commands.push(command);
                self.commands.len() - 1
            }
        };
        &self.commands[index]
    }

    /// Fully qualified id for `kind` under this registry's prefix.
    pub fn command_id(&self, kind: ConversionKind) -> String {
        format!("{}.{}", self.prefix, kind.id())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Resolve a command id to its conversion kind.
    ///
    /// An id under this registry's prefix whose conversion name is not a
    /// known kind fails with [`HostError::Conversion`]; any other
    /// unregistered id fails with [`HostError::UnknownCommand`].
    pub fn resolve(&self, id: &str) -> Result<ConversionKind, HostError> {
        if let Some(command) = self.get(id) {
            return Ok(command.kind);
        }
        if let Some(name) = id
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
        {
            // Surface typos in the conversion name as conversion errors.
            name.parse::<ConversionKind>()?;
        }
        Err(HostError::UnknownCommand(id.to_string()))
    }

    /// Run the command `id` against the workspace's active document.
    pub fn execute(
        &self,
        id: &str,
        workspace: &mut dyn Workspace,
    ) -> Result<ExecutionReport, HostError> {
        let kind = self.resolve(id).inspect_err(|e| {
            log::warn!("Cannot execute command '{id}': {e}");
        })?;
        log::info!("Executing command '{id}'");
        apply_conversion(kind, workspace)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Convert every non-empty selection of the active document with `kind`.
///
/// Reports "No active editor" through the workspace and fails with
/// [`HostError::NoActiveEditor`] when no document is open.
pub fn apply_conversion(
    kind: ConversionKind,
    workspace: &mut dyn Workspace,
) -> Result<ExecutionReport, HostError> {
    let Some(document) = workspace.active_document() else {
        workspace.show_error_message(NO_ACTIVE_EDITOR_MESSAGE);
        return Err(HostError::NoActiveEditor);
    };

    let mut edits = Vec::with_capacity(document.selections().len());
    let mut skipped = 0;
    for &selection in document.selections() {
        let text = document.get_text(selection)?;
        if text.is_empty() {
            skipped += 1;
            continue;
        }
        edits.push((selection, convert(kind, text)));
    }

    let converted = edits.len();
    if !edits.is_empty() {
        document.replace_selections(edits)?;
    }

    log::debug!("{kind:?}: converted {converted} selections, skipped {skipped}");
    Ok(ExecutionReport {
        kind,
        converted,
        skipped,
    })
}

/// Convert standalone text through an in-memory document.
///
/// With `per_line`, each non-empty line is its own selection, so line
/// breaks survive conversions that would otherwise join lines.
pub fn run_conversion(kind: ConversionKind, text: &str, per_line: bool) -> Result<String, HostError> {
    let mut document = TextDocument::new(text);
    if per_line {
        document.select_lines();
    } else {
        document.select_all();
    }

    let mut workspace = InMemoryWorkspace::with_document(document);
    apply_conversion(kind, &mut workspace)?;
    Ok(workspace
        .close()
        .map(|document| document.text().to_string())
        .unwrap_or_default())
}
