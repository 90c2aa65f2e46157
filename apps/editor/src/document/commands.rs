//! Closed command set over the document: one variant per user action.
//!
//! The session mutates the document only through `ResumeDocument::apply`, which makes
//! every edit loggable and replayable.

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;
use crate::models::{
    AccentColor, AdditionalField, BulletStyle, ContactPatch, EducationField, EntryId,
    ExperienceField, FontFamily, Template,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    UpdateContact(ContactPatch),
    SetSummary {
        text: String,
    },

    AddExperience,
    UpdateExperience {
        id: EntryId,
        field: ExperienceField,
        value: String,
    },
    RemoveExperience {
        id: EntryId,
    },
    AddAchievement {
        id: EntryId,
    },
    UpdateAchievement {
        id: EntryId,
        index: usize,
        value: String,
    },
    RemoveAchievement {
        id: EntryId,
        index: usize,
    },

    AddEducation,
    UpdateEducation {
        id: EntryId,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        id: EntryId,
    },

    AddSkill {
        text: String,
    },
    RemoveSkill {
        index: usize,
    },

    AddAdditional,
    UpdateAdditional {
        id: EntryId,
        field: AdditionalField,
        value: String,
    },
    RemoveAdditional {
        id: EntryId,
    },

    SetAccentColor {
        color: AccentColor,
    },
    SetFontFamily {
        font: FontFamily,
    },
    SetBaseFontSize {
        size: f32,
    },
    SetLineHeight {
        value: f32,
    },
    SetSectionSpacing {
        value: f32,
    },
    SetBulletStyle {
        style: BulletStyle,
    },
    SetTemplate {
        template: Template,
    },
}

impl Command {
    /// Stable snake_case name, used as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpdateContact(_) => "update_contact",
            Command::SetSummary { .. } => "set_summary",
            Command::AddExperience => "add_experience",
            Command::UpdateExperience { .. } => "update_experience",
            Command::RemoveExperience { .. } => "remove_experience",
            Command::AddAchievement { .. } => "add_achievement",
            Command::UpdateAchievement { .. } => "update_achievement",
            Command::RemoveAchievement { .. } => "remove_achievement",
            Command::AddEducation => "add_education",
            Command::UpdateEducation { .. } => "update_education",
            Command::RemoveEducation { .. } => "remove_education",
            Command::AddSkill { .. } => "add_skill",
            Command::RemoveSkill { .. } => "remove_skill",
            Command::AddAdditional => "add_additional",
            Command::UpdateAdditional { .. } => "update_additional",
            Command::RemoveAdditional { .. } => "remove_additional",
            Command::SetAccentColor { .. } => "set_accent_color",
            Command::SetFontFamily { .. } => "set_font_family",
            Command::SetBaseFontSize { .. } => "set_base_font_size",
            Command::SetLineHeight { .. } => "set_line_height",
            Command::SetSectionSpacing { .. } => "set_section_spacing",
            Command::SetBulletStyle { .. } => "set_bullet_style",
            Command::SetTemplate { .. } => "set_template",
        }
    }
}

impl ResumeDocument {
    /// Applies one command. Returns whether the document changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::UpdateContact(patch) => self.update_contact(patch),
            Command::SetSummary { text } => self.set_summary(text),

            Command::AddExperience => {
                self.add_experience();
                true
            }
            Command::UpdateExperience { id, field, value } => {
                self.update_experience(id, field, value)
            }
            Command::RemoveExperience { id } => self.remove_experience(id),
            Command::AddAchievement { id } => self.add_achievement(id),
            Command::UpdateAchievement { id, index, value } => {
                self.update_achievement(id, index, value)
            }
            Command::RemoveAchievement { id, index } => self.remove_achievement(id, index),

            Command::AddEducation => {
                self.add_education();
                true
            }
            Command::UpdateEducation { id, field, value } => self.update_education(id, field, value),
            Command::RemoveEducation { id } => self.remove_education(id),

            Command::AddSkill { text } => self.add_skill(&text),
            Command::RemoveSkill { index } => self.remove_skill(index),

            Command::AddAdditional => {
                self.add_additional();
                true
            }
            Command::UpdateAdditional { id, field, value } => {
                self.update_additional(id, field, value)
            }
            Command::RemoveAdditional { id } => self.remove_additional(id),

            Command::SetAccentColor { color } => self.set_accent_color(color),
            Command::SetFontFamily { font } => self.set_font_family(font),
            Command::SetBaseFontSize { size } => self.set_base_font_size(size),
            Command::SetLineHeight { value } => self.set_line_height(value),
            Command::SetSectionSpacing { value } => self.set_section_spacing(value),
            Command::SetBulletStyle { style } => self.set_bullet_style(style),
            Command::SetTemplate { template } => self.set_template(template),
        }
    }
}
