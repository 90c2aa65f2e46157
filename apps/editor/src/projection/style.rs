//! Style resolution — turns enumerated preferences into concrete layout directives.

use serde::Serialize;

use crate::models::{BulletStyle, Preferences, Template};

// ────────────────────────────────────────────────────────────────────────────
// Bullet markers
// ────────────────────────────────────────────────────────────────────────────

/// List markers a rendering engine can draw natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeMarker {
    Disc,
    Square,
}

impl NativeMarker {
    pub fn css_keyword(&self) -> &'static str {
        match self {
            NativeMarker::Disc => "disc",
            NativeMarker::Square => "square",
        }
    }
}

/// How a bulleted list must be drawn.
///
/// "–" is not a native list marker in most engines, so the dash style turns native
/// markers off and has the renderer draw `glyph` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ListMode {
    Native { marker: NativeMarker },
    CustomMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulletMarker {
    pub glyph: &'static str,
    pub mode: ListMode,
}

pub fn resolve_bullet(style: BulletStyle) -> BulletMarker {
    match style {
        BulletStyle::Disc => BulletMarker {
            glyph: "•",
            mode: ListMode::Native {
                marker: NativeMarker::Disc,
            },
        },
        BulletStyle::Square => BulletMarker {
            glyph: "■",
            mode: ListMode::Native {
                marker: NativeMarker::Square,
            },
        },
        BulletStyle::Dash => BulletMarker {
            glyph: "–",
            mode: ListMode::CustomMarker,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

/// Structural layout applied to the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutVariant {
    pub template: Template,
    /// Alignment of the name and contact line.
    pub header_alignment: Alignment,
    /// Thin accent-colored band down the left edge of the page.
    pub accent_band: bool,
}

pub fn resolve_layout(template: Template) -> LayoutVariant {
    match template {
        Template::Classic => LayoutVariant {
            template,
            header_alignment: Alignment::Left,
            accent_band: false,
        },
        Template::Centered => LayoutVariant {
            template,
            header_alignment: Alignment::Center,
            accent_band: false,
        },
        Template::Spotlight => LayoutVariant {
            template,
            header_alignment: Alignment::Left,
            accent_band: true,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style sheet
// ────────────────────────────────────────────────────────────────────────────

/// Fully resolved style for a display tree. Renderers apply it without
/// consulting `Preferences` again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSheet {
    /// CSS hex color.
    pub accent_color: &'static str,
    pub font_family: &'static str,
    pub font_size_pt: f32,
    /// Unitless ratio.
    pub line_height: f32,
    /// Gap between sections in rem.
    pub section_gap_rem: f32,
    pub bullet: BulletMarker,
    pub layout: LayoutVariant,
}

/// Numeric preferences pass through unchanged.
pub fn resolve_style(prefs: &Preferences) -> StyleSheet {
    StyleSheet {
        accent_color: prefs.accent_color.hex(),
        font_family: prefs.font_family.css_name(),
        font_size_pt: prefs.base_font_size,
        line_height: prefs.line_height,
        section_gap_rem: prefs.section_spacing,
        bullet: resolve_bullet(prefs.bullet_style),
        layout: resolve_layout(prefs.template),
    }
}
