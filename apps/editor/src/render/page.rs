//! Page geometry handed to the rasterizer along with the rendered document.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    A4,
    Letter,
}

impl PaperFormat {
    /// Keyword for the CSS `@page size` descriptor.
    pub fn css_keyword(&self) -> &'static str {
        match self {
            PaperFormat::A4 => "A4",
            PaperFormat::Letter => "letter",
        }
    }
}

impl FromStr for PaperFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperFormat::A4),
            "letter" => Ok(PaperFormat::Letter),
            other => Err(format!("unknown paper format '{other}' (expected a4 or letter)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn css_keyword(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(format!(
                "unknown orientation '{other}' (expected portrait or landscape)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub format: PaperFormat,
    pub orientation: Orientation,
    /// Margin on every side, in inches.
    pub margin_in: f32,
}

/// A4 portrait with half-inch margins.
pub fn default_page_settings() -> PageSettings {
    PageSettings {
        format: PaperFormat::A4,
        orientation: Orientation::Portrait,
        margin_in: 0.5,
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        default_page_settings()
    }
}
