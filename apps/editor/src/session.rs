//! Editor session — owns the document for one user and keeps its display tree current.
//!
//! # Recompute-on-write
//! Every command goes through `apply`, which mutates the document and re-projects it
//! before returning. `tree()` therefore always equals `project(document())`.
//!
//! # Export
//! `export` snapshots the tree and file name, then awaits the adapter. It borrows the
//! session immutably, so the document cannot change mid-snapshot; a failed export leaves
//! the document exactly as it was.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::document::{Command, ResumeDocument};
use crate::errors::ExportError;
use crate::export::{export_file_name, ExportAdapter, ExportRequest};
use crate::projection::{project, DisplayTree};

/// Oldest log entries are dropped beyond this many.
pub const MAX_LOG_ENTRIES: usize = 500;

/// One applied command and whether it changed the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedCommand {
    pub command: Command,
    pub changed: bool,
}

pub struct EditorSession {
    id: Uuid,
    document: ResumeDocument,
    tree: DisplayTree,
    history: VecDeque<LoggedCommand>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::new())
    }

    pub fn with_document(document: ResumeDocument) -> Self {
        let id = Uuid::new_v4();
        let tree = project(&document);
        info!(session_id = %id, "Editor session started");
        EditorSession {
            id,
            document,
            tree,
            history: VecDeque::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn tree(&self) -> &DisplayTree {
        &self.tree
    }

    /// Applied commands, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.history.iter()
    }

    /// Applies one user action and re-projects. Returns whether the document changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let name = command.name();
        let changed = self.document.apply(command.clone());

        if changed {
            self.tree = project(&self.document);
        } else {
            debug!(session_id = %self.id, command = name, "Command was a no-op");
        }

        if self.history.len() == MAX_LOG_ENTRIES {
            self.history.pop_front();
        }
        self.history.push_back(LoggedCommand { command, changed });
        changed
    }

    /// The tree and file name as they are right now.
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            tree: self.tree.clone(),
            file_name: export_file_name(&self.document.contact().full_name),
        }
    }

    /// Snapshots the current state and hands it to `adapter`. Not retried on failure.
    pub async fn export(&self, adapter: &dyn ExportAdapter) -> Result<(), ExportError> {
        let request = self.export_request();
        info!(session_id = %self.id, file_name = %request.file_name, "Export requested");

        match request.send(adapter).await {
            Ok(()) => {
                info!(session_id = %self.id, file_name = %request.file_name, "Export finished");
                Ok(())
            }
            Err(e) => {
                error!(
                    session_id = %self.id,
                    code = e.code(),
                    "Export failed: {e}"
                );
                Err(e)
            }
        }
    }
}
