//! Option catalog offered by the customization controls, with their display labels
//! and the read-out formatters for the numeric sliders.

use serde::Serialize;

use crate::models::preferences::{
    AccentColor, BulletStyle, FontFamily, NumericRange, Template, FONT_SIZE_RANGE,
    LINE_HEIGHT_RANGE, SECTION_SPACING_RANGE,
};

/// One selectable option: the typed value plus its human label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledOption<T> {
    pub value: T,
    pub label: &'static str,
}

impl AccentColor {
    pub fn label(&self) -> &'static str {
        match self {
            AccentColor::ProfessionalBlue => "Azul profissional",
            AccentColor::ElegantGreen => "Verde elegante",
            AccentColor::ModernPurple => "Roxo moderno",
        }
    }
}

impl Template {
    pub fn label(&self) -> &'static str {
        match self {
            Template::Classic => "Clássico direto",
            Template::Centered => "Cabeçalho centralizado",
            Template::Spotlight => "Faixa lateral sutil",
        }
    }
}

impl BulletStyle {
    pub fn label(&self) -> &'static str {
        match self {
            BulletStyle::Disc => "Padrão •",
            BulletStyle::Square => "Quadrado ■",
            BulletStyle::Dash => "Travessão –",
        }
    }
}

/// Everything the customization panel needs to draw its controls.
#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub accent_colors: Vec<LabeledOption<AccentColor>>,
    pub font_families: Vec<LabeledOption<FontFamily>>,
    pub templates: Vec<LabeledOption<Template>>,
    pub bullet_styles: Vec<LabeledOption<BulletStyle>>,
    pub font_size: NumericRange,
    pub line_height: NumericRange,
    pub section_spacing: NumericRange,
}

pub fn option_catalog() -> OptionCatalog {
    OptionCatalog {
        accent_colors: AccentColor::ALL
            .iter()
            .map(|&value| LabeledOption {
                value,
                label: value.label(),
            })
            .collect(),
        font_families: FontFamily::ALL
            .iter()
            .map(|&value| LabeledOption {
                value,
                label: value.css_name(),
            })
            .collect(),
        templates: Template::ALL
            .iter()
            .map(|&value| LabeledOption {
                value,
                label: value.label(),
            })
            .collect(),
        bullet_styles: BulletStyle::ALL
            .iter()
            .map(|&value| LabeledOption {
                value,
                label: value.label(),
            })
            .collect(),
        font_size: FONT_SIZE_RANGE,
        line_height: LINE_HEIGHT_RANGE,
        section_spacing: SECTION_SPACING_RANGE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slider read-outs
// ────────────────────────────────────────────────────────────────────────────

/// "12 pt" for whole sizes, "12.5 pt" otherwise.
pub fn format_font_size(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} pt")
    } else {
        format!("{value:.1} pt")
    }
}

pub fn format_line_height(value: f32) -> String {
    format!("{value:.2}")
}

pub fn format_section_spacing(value: f32) -> String {
    format!("{value:.1}x")
}
