//! Style preferences — the finite set of presentation parameters for a résumé.
//!
//! Enumerated fields are closed enums, so an out-of-palette value cannot be stored.
//! Numeric fields are NOT clamped here: callers clamp with the `*_RANGE` constants
//! before calling a setter. Out-of-range input is stored verbatim and logged.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Accent color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    #[default]
    ProfessionalBlue,
    ElegantGreen,
    ModernPurple,
}

impl AccentColor {
    pub const ALL: [AccentColor; 3] = [
        AccentColor::ProfessionalBlue,
        AccentColor::ElegantGreen,
        AccentColor::ModernPurple,
    ];

    /// CSS hex value for the color.
    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::ProfessionalBlue => "#1F497D",
            AccentColor::ElegantGreen => "#0F766E",
            AccentColor::ModernPurple => "#7C3AED",
        }
    }
}

/// Body font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Arial,
    Calibri,
    TimesNewRoman,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Arial,
        FontFamily::Calibri,
        FontFamily::TimesNewRoman,
    ];

    /// Family name as a renderer expects it.
    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Calibri => "Calibri",
            FontFamily::TimesNewRoman => "Times New Roman",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletStyle {
    #[default]
    Disc,
    Square,
    Dash,
}

impl BulletStyle {
    pub const ALL: [BulletStyle; 3] = [BulletStyle::Disc, BulletStyle::Square, BulletStyle::Dash];
}

/// Structural layout variant applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Classic,
    Centered,
    Spotlight,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Classic, Template::Centered, Template::Spotlight];
}

// ────────────────────────────────────────────────────────────────────────────
// Numeric ranges
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive bounds and slider step for a numeric preference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl NumericRange {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// Base font size in points.
pub const FONT_SIZE_RANGE: NumericRange = NumericRange {
    min: 11.0,
    max: 13.0,
    step: 0.5,
};

/// Unitless line-height ratio.
pub const LINE_HEIGHT_RANGE: NumericRange = NumericRange {
    min: 1.2,
    max: 1.8,
    step: 0.05,
};

/// Gap between sections in relative (rem) units.
pub const SECTION_SPACING_RANGE: NumericRange = NumericRange {
    min: 0.8,
    max: 1.4,
    step: 0.05,
};

// ────────────────────────────────────────────────────────────────────────────
// Preferences
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub accent_color: AccentColor,
    pub font_family: FontFamily,
    pub base_font_size: f32,
    pub line_height: f32,
    pub section_spacing: f32,
    pub bullet_style: BulletStyle,
    pub template: Template,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            accent_color: AccentColor::ProfessionalBlue,
            font_family: FontFamily::Arial,
            base_font_size: 12.0,
            line_height: 1.5,
            section_spacing: 1.0,
            bullet_style: BulletStyle::Disc,
            template: Template::Classic,
        }
    }
}

impl Preferences {
    pub fn set_accent_color(&mut self, color: AccentColor) -> bool {
        replace(&mut self.accent_color, color)
    }

    pub fn set_font_family(&mut self, font: FontFamily) -> bool {
        replace(&mut self.font_family, font)
    }

    pub fn set_base_font_size(&mut self, size: f32) -> bool {
        set_numeric(&mut self.base_font_size, "base_font_size", size, &FONT_SIZE_RANGE)
    }

    pub fn set_line_height(&mut self, value: f32) -> bool {
        set_numeric(&mut self.line_height, "line_height", value, &LINE_HEIGHT_RANGE)
    }

    pub fn set_section_spacing(&mut self, value: f32) -> bool {
        set_numeric(&mut self.section_spacing, "section_spacing", value, &SECTION_SPACING_RANGE)
    }

    pub fn set_bullet_style(&mut self, style: BulletStyle) -> bool {
        replace(&mut self.bullet_style, style)
    }

    pub fn set_template(&mut self, template: Template) -> bool {
        replace(&mut self.template, template)
    }
}

/// Stores `value` into `slot`; returns whether the stored value changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Non-finite values are rejected as no-ops; finite ones are stored even when out of range.
fn set_numeric(slot: &mut f32, field: &'static str, value: f32, range: &NumericRange) -> bool {
    if !value.is_finite() {
        warn!(field, value, "Ignoring non-finite preference value");
        return false;
    }
    warn_out_of_range(field, value, range);
    replace(slot, value)
}

fn warn_out_of_range(field: &'static str, value: f32, range: &NumericRange) {
    if !range.contains(value) {
        warn!(
            field,
            value,
            min = range.min,
            max = range.max,
            "Preference value outside its declared range; storing as given"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.accent_color.hex(), "#1F497D");
        assert_eq!(prefs.font_family, FontFamily::Arial);
        assert_eq!(prefs.base_font_size, 12.0);
        assert_eq!(prefs.line_height, 1.5);
        assert_eq!(prefs.section_spacing, 1.0);
        assert_eq!(prefs.bullet_style, BulletStyle::Disc);
        assert_eq!(prefs.template, Template::Classic);
    }

    #[test]
    fn test_each_setter_touches_only_its_field() {
        let base = Preferences::default();

        let mut p = base.clone();
        p.set_template(Template::Spotlight);
        assert_eq!(
            p,
            Preferences {
                template: Template::Spotlight,
                ..base.clone()
            }
        );

        let mut p = base.clone();
        p.set_line_height(1.75);
        assert_eq!(
            p,
            Preferences {
                line_height: 1.75,
                ..base.clone()
            }
        );

        let mut p = base.clone();
        p.set_accent_color(AccentColor::ModernPurple);
        assert_eq!(
            p,
            Preferences {
                accent_color: AccentColor::ModernPurple,
                ..base
            }
        );
    }

    #[test]
    fn test_out_of_range_numeric_is_stored_verbatim() {
        let mut p = Preferences::default();
        p.set_base_font_size(30.0);
        assert_eq!(p.base_font_size, 30.0);
    }

    #[test]
    fn test_non_finite_numeric_is_ignored() {
        let mut p = Preferences::default();
        assert!(!p.set_line_height(f32::NAN));
        assert!(!p.set_line_height(f32::NAN));
        assert!(!p.set_base_font_size(f32::INFINITY));
        assert!(!p.set_section_spacing(f32::NEG_INFINITY));
        assert_eq!(p, Preferences::default());
    }

    #[test]
    fn test_setter_reports_no_change_for_same_value() {
        let mut p = Preferences::default();
        assert!(!p.set_bullet_style(BulletStyle::Disc));
        assert!(p.set_bullet_style(BulletStyle::Dash));
    }

    #[test]
    fn test_range_clamp() {
        assert_eq!(FONT_SIZE_RANGE.clamp(9.0), 11.0);
        assert_eq!(FONT_SIZE_RANGE.clamp(14.0), 13.0);
        assert_eq!(LINE_HEIGHT_RANGE.clamp(1.4), 1.4);
        assert_eq!(SECTION_SPACING_RANGE.clamp(f32::NAN), 0.8);
    }

    #[test]
    fn test_preferences_serialize_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["accentColor"], "professional_blue");
        assert_eq!(json["bulletStyle"], "disc");
        assert_eq!(json["baseFontSize"], 12.0);
    }
}
