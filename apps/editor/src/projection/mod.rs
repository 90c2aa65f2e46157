//! Projection Engine — pure mapping from a `ResumeDocument` to a `DisplayTree`.
//!
//! # Rules
//! - An entry is shown only if at least one of its own scalar fields is non-blank
//!   after trimming. Skills and achievements are filtered the same way.
//! - Sections with nothing left to show get a fixed placeholder, except the
//!   additional section, which is left out of the tree entirely.
//! - Dates are formatted with `dates::format_month`; styles with `style::resolve_style`.
//!
//! `project` performs no I/O and holds no state, so calling it after every edit is
//! always correct.

pub mod dates;
pub mod labels;
pub mod style;
pub mod tree;

use crate::document::ResumeDocument;
use crate::models::{
    AdditionalEntry, AdditionalField, ContactInfo, EducationEntry, EducationField,
    ExperienceEntry, ExperienceField,
};

use self::dates::format_range;
use self::labels::*;
use self::style::{resolve_style, BulletMarker};

pub use self::style::StyleSheet;
pub use self::tree::{
    Article, BulletList, ContactItem, DisplayTree, Header, Section, SectionBody, SectionKind,
};

pub fn project(doc: &ResumeDocument) -> DisplayTree {
    let style = resolve_style(doc.preferences());
    let marker = style.bullet;

    let mut sections = vec![
        summary_section(doc.summary()),
        experience_section(doc.experiences(), marker),
        education_section(doc.education()),
        skills_section(doc.skills()),
    ];
    if let Some(additional) = additional_section(doc.additional()) {
        sections.push(additional);
    }

    DisplayTree {
        header: header(doc.contact()),
        style,
        sections,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Emptiness predicates
// ────────────────────────────────────────────────────────────────────────────

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn experience_has_content(entry: &ExperienceEntry) -> bool {
    ExperienceField::ALL.iter().any(|&f| !is_blank(entry.field(f)))
}

pub fn education_has_content(entry: &EducationEntry) -> bool {
    EducationField::ALL.iter().any(|&f| !is_blank(entry.field(f)))
}

pub fn additional_has_content(entry: &AdditionalEntry) -> bool {
    AdditionalField::ALL.iter().any(|&f| !is_blank(entry.field(f)))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn non_blank_items(items: &[String]) -> Vec<String> {
    items.iter().filter_map(|s| non_blank(s)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn header(contact: &ContactInfo) -> Header {
    let (name, name_is_placeholder) = match non_blank(&contact.full_name) {
        Some(name) => (name, false),
        None => (NAME_PLACEHOLDER.to_string(), true),
    };

    let mut contact_line = Vec::new();
    if let Some(city_state) = non_blank(&contact.city_state) {
        contact_line.push(ContactItem::Text { text: city_state });
    }
    if let Some(email) = non_blank(&contact.email) {
        contact_line.push(ContactItem::Link {
            href: format!("mailto:{email}"),
            label: email,
        });
    }
    if let Some(phone) = non_blank(&contact.phone) {
        contact_line.push(ContactItem::Text { text: phone });
    }
    if let Some(linkedin) = non_blank(&contact.linkedin) {
        if is_web_url(&linkedin) {
            contact_line.push(ContactItem::Link {
                label: LINKEDIN_LABEL.to_string(),
                href: linkedin,
            });
        } else {
            contact_line.push(ContactItem::Text { text: linkedin });
        }
    }

    Header {
        name,
        name_is_placeholder,
        contact_line,
    }
}

/// Only `http://` and `https://` values become links; anything else is shown as text.
fn is_web_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn summary_section(summary: &str) -> Section {
    let body = match non_blank(summary) {
        Some(text) => SectionBody::Paragraph(text),
        None => SectionBody::Placeholder(SUMMARY_PLACEHOLDER),
    };
    Section {
        kind: SectionKind::Summary,
        heading: SUMMARY_HEADING,
        body,
    }
}

fn experience_section(entries: &[ExperienceEntry], marker: BulletMarker) -> Section {
    let articles: Vec<Article> = entries
        .iter()
        .filter(|e| experience_has_content(e))
        .map(|e| experience_article(e, marker))
        .collect();

    Section {
        kind: SectionKind::Experience,
        heading: EXPERIENCE_HEADING,
        body: articles_or(articles, EXPERIENCE_PLACEHOLDER),
    }
}

fn experience_article(entry: &ExperienceEntry, marker: BulletMarker) -> Article {
    let meta = format_range(&entry.start_date, &entry.end_date)
        .into_iter()
        .chain(non_blank(&entry.location))
        .collect();

    let items = non_blank_items(&entry.achievements);
    let bullets = (!items.is_empty()).then_some(BulletList { marker, items });

    Article {
        entry_id: entry.id,
        title: entry.title.trim().to_string(),
        subheading: non_blank(&entry.company),
        meta,
        body: None,
        bullets,
    }
}

fn education_section(entries: &[EducationEntry]) -> Section {
    let articles: Vec<Article> = entries
        .iter()
        .filter(|e| education_has_content(e))
        .map(|entry| Article {
            entry_id: entry.id,
            title: entry.degree.trim().to_string(),
            subheading: non_blank(&entry.institution),
            meta: non_blank(&entry.year)
                .into_iter()
                .chain(non_blank(&entry.location))
                .collect(),
            body: None,
            bullets: None,
        })
        .collect();

    Section {
        kind: SectionKind::Education,
        heading: EDUCATION_HEADING,
        body: articles_or(articles, EDUCATION_PLACEHOLDER),
    }
}

fn skills_section(skills: &[String]) -> Section {
    let items = non_blank_items(skills);
    let body = if items.is_empty() {
        SectionBody::Placeholder(SKILLS_PLACEHOLDER)
    } else {
        SectionBody::InlineList(items)
    };
    Section {
        kind: SectionKind::Skills,
        heading: SKILLS_HEADING,
        body,
    }
}

/// `None` when no additional entry has content.
fn additional_section(entries: &[AdditionalEntry]) -> Option<Section> {
    let articles: Vec<Article> = entries
        .iter()
        .filter(|e| additional_has_content(e))
        .map(|entry| Article {
            entry_id: entry.id,
            title: entry.heading.trim().to_string(),
            subheading: None,
            meta: Vec::new(),
            body: non_blank(&entry.details),
            bullets: None,
        })
        .collect();

    if articles.is_empty() {
        return None;
    }
    Some(Section {
        kind: SectionKind::Additional,
        heading: ADDITIONAL_HEADING,
        body: SectionBody::Articles(articles),
    })
}

fn articles_or(articles: Vec<Article>, placeholder: &'static str) -> SectionBody {
    if articles.is_empty() {
        SectionBody::Placeholder(placeholder)
    } else {
        SectionBody::Articles(articles)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BulletStyle, ContactPatch, Template};
    use crate::projection::style::{Alignment, ListMode};

    fn body(tree: &DisplayTree, kind: SectionKind) -> &SectionBody {
        &tree.section(kind).expect("section present").body
    }

    // ── placeholders ────────────────────────────────────────────────────────

    #[test]
    fn test_blank_document_shows_every_placeholder() {
        let tree = project(&ResumeDocument::new());

        assert_eq!(tree.header.name, NAME_PLACEHOLDER);
        assert!(tree.header.name_is_placeholder);
        assert!(tree.header.contact_line.is_empty());
        assert_eq!(
            body(&tree, SectionKind::Summary),
            &SectionBody::Placeholder(SUMMARY_PLACEHOLDER)
        );
        assert_eq!(
            body(&tree, SectionKind::Experience),
            &SectionBody::Placeholder(EXPERIENCE_PLACEHOLDER)
        );
        assert_eq!(
            body(&tree, SectionKind::Education),
            &SectionBody::Placeholder(EDUCATION_PLACEHOLDER)
        );
        assert_eq!(
            body(&tree, SectionKind::Skills),
            &SectionBody::Placeholder(SKILLS_PLACEHOLDER)
        );
        assert!(tree.section(SectionKind::Additional).is_none());
    }

    #[test]
    fn test_placeholders_are_distinct_per_section() {
        let all = [
            NAME_PLACEHOLDER,
            SUMMARY_PLACEHOLDER,
            EXPERIENCE_PLACEHOLDER,
            EDUCATION_PLACEHOLDER,
            SKILLS_PLACEHOLDER,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_whitespace_summary_is_placeholder() {
        let mut doc = ResumeDocument::new();
        doc.set_summary("   \n ");
        assert!(body(&project(&doc), SectionKind::Summary).is_placeholder());

        doc.set_summary("Analista de dados com foco em BI.");
        assert_eq!(
            body(&project(&doc), SectionKind::Summary),
            &SectionBody::Paragraph("Analista de dados com foco em BI.".to_string())
        );
    }

    // ── emptiness filtering ─────────────────────────────────────────────────

    #[test]
    fn test_blank_experience_excluded_until_one_field_set() {
        let mut doc = ResumeDocument::new();
        let id = doc.experiences()[0].id;

        assert!(body(&project(&doc), SectionKind::Experience)
            .articles()
            .is_empty());

        doc.update_experience(id, ExperienceField::Title, "Analista");
        let tree = project(&doc);
        let articles = body(&tree, SectionKind::Experience).articles();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].entry_id, id);
        assert_eq!(articles[0].title, "Analista");
    }

    #[test]
    fn test_whitespace_only_fields_count_as_blank() {
        let mut doc = ResumeDocument::new();
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::Company, "   ");
        doc.update_achievement(id, 0, "Entreguei um dashboard");

        // Achievements alone do not make an experience visible.
        assert!(body(&project(&doc), SectionKind::Experience).is_placeholder());
    }

    #[test]
    fn test_achievements_filtered_to_non_blank() {
        let mut doc = ResumeDocument::new();
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::Company, "Empresa XYZ");
        doc.update_achievement(id, 0, "Reduzi custos em 20%");
        doc.add_achievement(id);
        doc.add_achievement(id);
        doc.update_achievement(id, 2, "  Automatizei relatórios  ");

        let tree = project(&doc);
        let article = &body(&tree, SectionKind::Experience).articles()[0];
        let bullets = article.bullets.as_ref().unwrap();
        assert_eq!(
            bullets.items,
            vec![
                "Reduzi custos em 20%".to_string(),
                "Automatizei relatórios".to_string()
            ]
        );
        assert_eq!(article.subheading.as_deref(), Some("Empresa XYZ"));
    }

    #[test]
    fn test_experience_without_achievements_has_no_list() {
        let mut doc = ResumeDocument::new();
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::Title, "Analista");

        let tree = project(&doc);
        assert!(body(&tree, SectionKind::Experience).articles()[0]
            .bullets
            .is_none());
    }

    #[test]
    fn test_education_filtering_and_meta() {
        let mut doc = ResumeDocument::new();
        let blank = doc.education()[0].id;
        let filled = doc.add_education();
        doc.update_education(filled, EducationField::Degree, "Bacharelado em Administração");
        doc.update_education(filled, EducationField::Institution, "Universidade Federal");
        doc.update_education(filled, EducationField::Year, "2023");
        doc.update_education(filled, EducationField::Location, "Curitiba, PR");

        let tree = project(&doc);
        let articles = body(&tree, SectionKind::Education).articles();
        assert_eq!(articles.len(), 1);
        assert_ne!(articles[0].entry_id, blank);
        assert_eq!(
            articles[0].meta,
            vec!["2023".to_string(), "Curitiba, PR".to_string()]
        );
    }

    #[test]
    fn test_skills_inline_list() {
        let mut doc = ResumeDocument::new();
        doc.add_skill("SQL");
        doc.add_skill("Power BI");
        assert_eq!(
            body(&project(&doc), SectionKind::Skills),
            &SectionBody::InlineList(vec!["SQL".to_string(), "Power BI".to_string()])
        );
    }

    #[test]
    fn test_additional_section_appears_with_content() {
        let mut doc = ResumeDocument::new();
        let empty = doc.add_additional();
        let lang = doc.add_additional();
        doc.update_additional(lang, AdditionalField::Details, "Inglês fluente");

        let tree = project(&doc);
        let section = tree.section(SectionKind::Additional).unwrap();
        assert_eq!(section.heading, ADDITIONAL_HEADING);
        let articles = section.body.articles();
        assert_eq!(articles.len(), 1);
        assert_ne!(articles[0].entry_id, empty);
        assert_eq!(articles[0].body.as_deref(), Some("Inglês fluente"));
        assert!(articles[0].title.is_empty());
    }

    // ── dates ───────────────────────────────────────────────────────────────

    #[test]
    fn test_experience_meta_has_range_then_location() {
        let mut doc = ResumeDocument::new();
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::StartDate, "2021-02");
        doc.update_experience(id, ExperienceField::EndDate, "2024-03");
        doc.update_experience(id, ExperienceField::Location, "Rio de Janeiro, RJ");

        let tree = project(&doc);
        assert_eq!(
            body(&tree, SectionKind::Experience).articles()[0].meta,
            vec!["02/2021 — 03/2024".to_string(), "Rio de Janeiro, RJ".to_string()]
        );
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_contact_line_order_and_links() {
        let mut doc = ResumeDocument::new();
        doc.update_contact(ContactPatch {
            full_name: Some("Ana Souza".into()),
            city_state: Some("São Paulo, SP".into()),
            email: Some("ana@empresa.com".into()),
            phone: Some("(11) 99999-9999".into()),
            linkedin: Some("https://linkedin.com/in/ana".into()),
        });

        let header = project(&doc).header;
        assert_eq!(header.name, "Ana Souza");
        assert!(!header.name_is_placeholder);
        assert_eq!(
            header.contact_line,
            vec![
                ContactItem::Text {
                    text: "São Paulo, SP".into()
                },
                ContactItem::Link {
                    label: "ana@empresa.com".into(),
                    href: "mailto:ana@empresa.com".into()
                },
                ContactItem::Text {
                    text: "(11) 99999-9999".into()
                },
                ContactItem::Link {
                    label: "LinkedIn".into(),
                    href: "https://linkedin.com/in/ana".into()
                },
            ]
        );
    }

    #[test]
    fn test_non_web_linkedin_is_plain_text() {
        let mut doc = ResumeDocument::new();
        doc.update_contact(ContactPatch {
            linkedin: Some("javascript:alert(1)".into()),
            ..ContactPatch::default()
        });
        assert_eq!(
            project(&doc).header.contact_line,
            vec![ContactItem::Text {
                text: "javascript:alert(1)".into()
            }]
        );

        doc.update_contact(ContactPatch {
            linkedin: Some("linkedin.com/in/ana".into()),
            ..ContactPatch::default()
        });
        assert!(matches!(
            project(&doc).header.contact_line[0],
            ContactItem::Text { .. }
        ));

        doc.update_contact(ContactPatch {
            linkedin: Some("HTTPS://www.linkedin.com/in/ana".into()),
            ..ContactPatch::default()
        });
        assert!(matches!(
            project(&doc).header.contact_line[0],
            ContactItem::Link { .. }
        ));
    }

    // ── style ───────────────────────────────────────────────────────────────

    #[test]
    fn test_style_follows_preferences() {
        let mut doc = ResumeDocument::new();
        doc.set_bullet_style(BulletStyle::Dash);
        doc.set_template(Template::Centered);
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::Title, "Analista");
        doc.update_achievement(id, 0, "Entreguei");

        let tree = project(&doc);
        assert_eq!(tree.style.bullet.mode, ListMode::CustomMarker);
        assert_eq!(tree.style.layout.header_alignment, Alignment::Center);

        let list = body(&tree, SectionKind::Experience).articles()[0]
            .bullets
            .clone()
            .unwrap();
        assert_eq!(list.marker.glyph, "–");
    }

    // ── purity ──────────────────────────────────────────────────────────────

    #[test]
    fn test_projection_is_idempotent() {
        let mut doc = ResumeDocument::new();
        doc.update_contact(ContactPatch::full_name("Ana Souza"));
        doc.add_skill("SQL");
        let id = doc.experiences()[0].id;
        doc.update_experience(id, ExperienceField::StartDate, "not-a-date");

        assert_eq!(project(&doc), project(&doc));
    }

    #[test]
    fn test_projection_stays_idempotent_after_nan_preference() {
        let mut doc = ResumeDocument::new();
        assert!(!doc.set_line_height(f32::NAN));
        assert!(!doc.set_section_spacing(f32::NAN));
        assert_eq!(project(&doc), project(&doc));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut doc = ResumeDocument::new();
        let id = doc.add_additional();
        doc.update_additional(id, AdditionalField::Heading, "Certificações");

        let kinds: Vec<SectionKind> = project(&doc).sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Additional,
            ]
        );
    }
}
