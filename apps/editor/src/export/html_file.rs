use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::errors::ExportError;
use crate::export::ExportAdapter;
use crate::projection::DisplayTree;
use crate::render::{render_document, PageSettings};

/// Writes the rendered HTML document to `<output_dir>/<file_name>.html`.
///
/// The page settings end up in the document's `@page` rule, so any print-capable
/// engine pointed at the file paginates it as configured.
#[derive(Debug, Clone)]
pub struct HtmlFileExporter {
    output_dir: PathBuf,
    page: PageSettings,
}

impl HtmlFileExporter {
    pub fn new(output_dir: impl Into<PathBuf>, page: PageSettings) -> Self {
        HtmlFileExporter {
            output_dir: output_dir.into(),
            page,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.export_dir.clone(), config.page)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the artifact for `file_name` is written to.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!("{file_name}.html"))
    }
}

#[async_trait]
impl ExportAdapter for HtmlFileExporter {
    async fn export(&self, tree: &DisplayTree, file_name: &str) -> Result<(), ExportError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(ExportError::Rejected(format!(
                "file name '{file_name}' is not a plain base name"
            )));
        }

        let html = render_document(tree, &self.page);
        let path = self.target_path(file_name);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, html.as_bytes()).await?;

        info!(path = %path.display(), bytes = html.len(), "HTML export written");
        Ok(())
    }
}
