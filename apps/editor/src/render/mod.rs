// Rendering of a resolved display tree into markup for the external rasterizer.

pub mod html;
pub mod page;

pub use html::render_document;
pub use page::{default_page_settings, Orientation, PageSettings, PaperFormat};
