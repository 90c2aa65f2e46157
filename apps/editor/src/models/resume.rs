use serde::{Deserialize, Serialize};

use crate::models::ids::{new_id, EntryId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    pub city_state: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// Partial contact update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    pub full_name: Option<String>,
    pub city_state: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

impl ContactPatch {
    pub fn full_name(value: impl Into<String>) -> Self {
        ContactPatch {
            full_name: Some(value.into()),
            ..Default::default()
        }
    }
}

/// A work experience. `achievements` always holds at least one (possibly blank) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// "YYYY-MM" or empty.
    pub start_date: String,
    /// "YYYY-MM" or empty.
    pub end_date: String,
    pub achievements: Vec<String>,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        ExperienceEntry {
            id: new_id(),
            title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            achievements: vec![String::new()],
        }
    }

    pub fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::Location => &self.location,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Title => &mut self.title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::Location => &mut self.location,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub year: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        EducationEntry {
            id: new_id(),
            degree: String::new(),
            institution: String::new(),
            location: String::new(),
            year: String::new(),
        }
    }

    pub fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Institution => &self.institution,
            EducationField::Location => &self.location,
            EducationField::Year => &self.year,
        }
    }

    pub(crate) fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Institution => &mut self.institution,
            EducationField::Location => &mut self.location,
            EducationField::Year => &mut self.year,
        }
    }
}

/// Free-form labeled block (certifications, languages, volunteering, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalEntry {
    pub id: EntryId,
    pub heading: String,
    pub details: String,
}

impl AdditionalEntry {
    pub fn blank() -> Self {
        AdditionalEntry {
            id: new_id(),
            heading: String::new(),
            details: String::new(),
        }
    }

    pub fn field(&self, field: AdditionalField) -> &str {
        match field {
            AdditionalField::Heading => &self.heading,
            AdditionalField::Details => &self.details,
        }
    }

    pub(crate) fn field_mut(&mut self, field: AdditionalField) -> &mut String {
        match field {
            AdditionalField::Heading => &mut self.heading,
            AdditionalField::Details => &mut self.details,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Updatable field tags
// ────────────────────────────────────────────────────────────────────────────

/// Scalar fields of an experience entry that `update_experience` may replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::Location,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    Location,
    Year,
}

impl EducationField {
    pub const ALL: [EducationField; 4] = [
        EducationField::Degree,
        EducationField::Institution,
        EducationField::Location,
        EducationField::Year,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdditionalField {
    Heading,
    Details,
}

impl AdditionalField {
    pub const ALL: [AdditionalField; 2] = [AdditionalField::Heading, AdditionalField::Details];
}
