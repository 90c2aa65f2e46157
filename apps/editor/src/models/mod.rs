pub mod ids;
pub mod options;
pub mod preferences;
pub mod resume;

pub use ids::{new_id, EntryId};
pub use preferences::{AccentColor, BulletStyle, FontFamily, NumericRange, Preferences, Template};
pub use resume::{
    AdditionalEntry, AdditionalField, ContactInfo, ContactPatch, EducationEntry, EducationField,
    ExperienceEntry, ExperienceField,
};
