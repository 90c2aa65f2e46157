//! Export Adapter seam.
//!
//! The editor hands an adapter a fully resolved `DisplayTree` and a derived base file
//! name. The adapter owns everything after that (pagination, file format, saving).
//! The editor never retries a failed export and never inspects the artifact.

pub mod file_name;
pub mod html_file;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::ExportError;
use crate::projection::DisplayTree;

pub use file_name::{export_file_name, FALLBACK_FILE_NAME};
pub use html_file::HtmlFileExporter;

#[async_trait]
pub trait ExportAdapter: Send + Sync {
    /// Produces the artifact for `tree`. `file_name` has no extension.
    async fn export(&self, tree: &DisplayTree, file_name: &str) -> Result<(), ExportError>;
}

/// Snapshot of what gets exported: the tree and the file name at request time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRequest {
    pub tree: DisplayTree,
    pub file_name: String,
}

impl ExportRequest {
    pub async fn send(&self, adapter: &dyn ExportAdapter) -> Result<(), ExportError> {
        adapter.export(&self.tree, &self.file_name).await
    }
}
