//! Display tree — the display-ready, style-resolved output of the projection.
//!
//! Shaped like a small DOM: a header block, then an ordered list of sections whose
//! bodies are paragraphs, placeholders, articles, or inline lists.

use serde::Serialize;

use crate::models::EntryId;
use crate::projection::style::{BulletMarker, StyleSheet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTree {
    pub style: StyleSheet,
    pub header: Header,
    pub sections: Vec<Section>,
}

impl DisplayTree {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    /// True when `name` is the placeholder rather than the user's name.
    pub name_is_placeholder: bool,
    pub contact_line: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactItem {
    Text { text: String },
    Link { label: String, href: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Additional,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(String),
    Placeholder(&'static str),
    Articles(Vec<Article>),
    InlineList(Vec<String>),
}

impl SectionBody {
    pub fn articles(&self) -> &[Article] {
        match self {
            SectionBody::Articles(articles) => articles,
            _ => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SectionBody::Placeholder(_))
    }
}

/// One repeated entry (experience, education, or additional block).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Id of the source entry, for keying the rendered element.
    pub entry_id: EntryId,
    pub title: String,
    pub subheading: Option<String>,
    /// Right-aligned meta items: date range, year, location.
    pub meta: Vec<String>,
    pub body: Option<String>,
    pub bullets: Option<BulletList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletList {
    pub marker: BulletMarker,
    pub items: Vec<String>,
}
