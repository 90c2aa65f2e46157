//! Résumé editor core: document state, projection to a display tree, and the export seam.
//!
//! A host application owns one `EditorSession` per open résumé, feeds it `Command`s, and
//! renders `session.tree()`. Exports go through an `ExportAdapter`; `HtmlFileExporter`
//! is the one shipped here.

pub mod config;
pub mod document;
pub mod errors;
pub mod export;
pub mod models;
pub mod projection;
pub mod render;
pub mod session;
pub mod telemetry;

pub use config::Config;
pub use document::{Command, ResumeDocument};
pub use errors::ExportError;
pub use export::{export_file_name, ExportAdapter, ExportRequest, HtmlFileExporter};
pub use projection::{project, DisplayTree};
pub use session::EditorSession;
pub use telemetry::init_tracing;
