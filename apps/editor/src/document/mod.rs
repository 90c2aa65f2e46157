//! Résumé document — the aggregate root and every operation allowed to mutate it.
//!
//! # Invariants
//! - `experiences` and `education` never drop below one entry.
//! - Every experience keeps at least one achievement slot.
//! - `skills` never stores a blank string.
//! - Entry ids are assigned on creation and never change.
//!
//! Invalid targets (unknown id, out-of-range index, blank skill, removing the last
//! entry) are absorbed as no-ops. Every method reports whether the document changed;
//! callers are free to ignore it.

pub mod commands;

use serde::{Deserialize, Serialize};

use crate::models::{
    AccentColor, AdditionalEntry, AdditionalField, BulletStyle, ContactInfo, ContactPatch,
    EducationEntry, EducationField, EntryId, ExperienceEntry, ExperienceField, FontFamily,
    Preferences, Template,
};

pub use commands::Command;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    contact: ContactInfo,
    summary: String,
    experiences: Vec<ExperienceEntry>,
    education: Vec<EducationEntry>,
    skills: Vec<String>,
    additional: Vec<AdditionalEntry>,
    preferences: Preferences,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            contact: ContactInfo::default(),
            summary: String::new(),
            experiences: vec![ExperienceEntry::blank()],
            education: vec![EducationEntry::blank()],
            skills: Vec::new(),
            additional: Vec::new(),
            preferences: Preferences::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Read access
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn experiences(&self) -> &[ExperienceEntry] {
        &self.experiences
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn additional(&self) -> &[AdditionalEntry] {
        &self.additional
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn experience(&self, id: EntryId) -> Option<&ExperienceEntry> {
        self.experiences.iter().find(|e| e.id == id)
    }

    pub fn education_entry(&self, id: EntryId) -> Option<&EducationEntry> {
        self.education.iter().find(|e| e.id == id)
    }

    pub fn additional_entry(&self, id: EntryId) -> Option<&AdditionalEntry> {
        self.additional.iter().find(|e| e.id == id)
    }

    fn experience_mut(&mut self, id: EntryId) -> Option<&mut ExperienceEntry> {
        self.experiences.iter_mut().find(|e| e.id == id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact & summary
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    /// Merges the `Some` fields of `patch` into the contact info.
    pub fn update_contact(&mut self, patch: ContactPatch) -> bool {
        let ContactPatch {
            full_name,
            city_state,
            email,
            phone,
            linkedin,
        } = patch;

        let mut changed = false;
        changed |= merge(&mut self.contact.full_name, full_name);
        changed |= merge(&mut self.contact.city_state, city_state);
        changed |= merge(&mut self.contact.email, email);
        changed |= merge(&mut self.contact.phone, phone);
        changed |= merge(&mut self.contact.linkedin, linkedin);
        changed
    }

    pub fn set_summary(&mut self, text: impl Into<String>) -> bool {
        set_text(&mut self.summary, text.into())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    /// Appends a blank experience with a single blank achievement slot.
    pub fn add_experience(&mut self) -> EntryId {
        let entry = ExperienceEntry::blank();
        let id = entry.id;
        self.experiences.push(entry);
        id
    }

    pub fn update_experience(
        &mut self,
        id: EntryId,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        match self.experience_mut(id) {
            Some(entry) => set_text(entry.field_mut(field), value.into()),
            None => false,
        }
    }

    /// Removes the experience unless it is the last one left.
    pub fn remove_experience(&mut self, id: EntryId) -> bool {
        remove_above_floor(&mut self.experiences, |e| e.id == id)
    }

    pub fn add_achievement(&mut self, id: EntryId) -> bool {
        match self.experience_mut(id) {
            Some(entry) => {
                entry.achievements.push(String::new());
                true
            }
            None => false,
        }
    }

    pub fn update_achievement(&mut self, id: EntryId, index: usize, value: impl Into<String>) -> bool {
        self.experience_mut(id)
            .and_then(|entry| entry.achievements.get_mut(index))
            .map(|slot| set_text(slot, value.into()))
            .unwrap_or(false)
    }

    /// Removes one achievement. Removing the only slot leaves a single blank slot.
    pub fn remove_achievement(&mut self, id: EntryId, index: usize) -> bool {
        let Some(entry) = self.experience_mut(id) else {
            return false;
        };
        if index >= entry.achievements.len() {
            return false;
        }
        entry.achievements.remove(index);
        if entry.achievements.is_empty() {
            entry.achievements.push(String::new());
        }
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    pub fn add_education(&mut self) -> EntryId {
        let entry = EducationEntry::blank();
        let id = entry.id;
        self.education.push(entry);
        id
    }

    pub fn update_education(
        &mut self,
        id: EntryId,
        field: EducationField,
        value: impl Into<String>,
    ) -> bool {
        match self.education.iter_mut().find(|e| e.id == id) {
            Some(entry) => set_text(entry.field_mut(field), value.into()),
            None => false,
        }
    }

    /// Removes the education entry unless it is the last one left.
    pub fn remove_education(&mut self, id: EntryId) -> bool {
        remove_above_floor(&mut self.education, |e| e.id == id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    /// Appends the trimmed skill. Blank input is ignored; duplicates are kept.
    pub fn add_skill(&mut self, text: &str) -> bool {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return false;
        }
        self.skills.push(cleaned.to_string());
        true
    }

    pub fn remove_skill(&mut self, index: usize) -> bool {
        if index >= self.skills.len() {
            return false;
        }
        self.skills.remove(index);
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Additional sections
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    pub fn add_additional(&mut self) -> EntryId {
        let entry = AdditionalEntry::blank();
        let id = entry.id;
        self.additional.push(entry);
        id
    }

    pub fn update_additional(
        &mut self,
        id: EntryId,
        field: AdditionalField,
        value: impl Into<String>,
    ) -> bool {
        match self.additional.iter_mut().find(|e| e.id == id) {
            Some(entry) => set_text(entry.field_mut(field), value.into()),
            None => false,
        }
    }

    /// Removes the entry. This list has no floor and may become empty.
    pub fn remove_additional(&mut self, id: EntryId) -> bool {
        let before = self.additional.len();
        self.additional.retain(|e| e.id != id);
        self.additional.len() != before
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preferences
// ────────────────────────────────────────────────────────────────────────────

impl ResumeDocument {
    pub fn set_accent_color(&mut self, color: AccentColor) -> bool {
        self.preferences.set_accent_color(color)
    }

    pub fn set_font_family(&mut self, font: FontFamily) -> bool {
        self.preferences.set_font_family(font)
    }

    pub fn set_base_font_size(&mut self, size: f32) -> bool {
        self.preferences.set_base_font_size(size)
    }

    pub fn set_line_height(&mut self, value: f32) -> bool {
        self.preferences.set_line_height(value)
    }

    pub fn set_section_spacing(&mut self, value: f32) -> bool {
        self.preferences.set_section_spacing(value)
    }

    pub fn set_bullet_style(&mut self, style: BulletStyle) -> bool {
        self.preferences.set_bullet_style(style)
    }

    pub fn set_template(&mut self, template: Template) -> bool {
        self.preferences.set_template(template)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn set_text(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn merge(slot: &mut String, value: Option<String>) -> bool {
    value.map(|v| set_text(slot, v)).unwrap_or(false)
}

/// Removes the first matching item unless the list would drop below one element.
fn remove_above_floor<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    if items.len() <= 1 {
        return false;
    }
    match items.iter().position(matches) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
