//! HTML rendering of a display tree.
//!
//! Produces one self-contained HTML5 document: resolved style values go into CSS
//! custom properties on the root element, page geometry into an `@page` rule. The
//! output is what a paginating rasterizer (headless browser, html-to-pdf service)
//! consumes. Markup is built with `maud`, so every interpolated value is escaped.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::Template;
use crate::projection::style::{Alignment, ListMode, StyleSheet};
use crate::projection::{Article, ContactItem, DisplayTree, Header, Section, SectionBody, SectionKind};
use crate::render::page::PageSettings;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; }
.resume { font-family: var(--resume-font), sans-serif; font-size: var(--resume-font-size); line-height: var(--resume-line-height); color: #1f2933; }
.resume h1 { margin: 0; color: var(--accent-color); }
.resume h2 { margin: 0 0 0.4rem; color: var(--accent-color); border-bottom: 1px solid var(--accent-color); font-size: 1.1em; text-transform: uppercase; }
.resume h3 { margin: 0; font-size: 1em; }
.header.align-center { text-align: center; }
.header.align-center .contact-line { justify-content: center; }
.contact-line { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 0.25rem; }
.section { margin-top: var(--resume-section-gap); }
.entry { margin-bottom: 0.6rem; page-break-inside: avoid; }
.entry-header { display: flex; justify-content: space-between; gap: 1rem; }
.subheading { margin: 0; font-style: italic; }
.meta { display: flex; flex-direction: column; align-items: flex-end; white-space: nowrap; }
.placeholder { color: #9aa5b1; font-style: italic; }
.list { margin: 0.3rem 0 0; padding-left: 1.2rem; list-style-type: var(--resume-list-style); }
.list-dash { list-style: none; padding-left: 1.2rem; }
.list-dash li { position: relative; }
.list-dash li::before { content: var(--resume-marker-symbol); position: absolute; left: -1rem; }
.inline-list { display: flex; flex-wrap: wrap; gap: 0.4rem 1rem; margin: 0; padding: 0; list-style: none; }
.inline-list li::before { content: var(--resume-inline-marker); margin-right: 0.35rem; color: var(--accent-color); }
.template-spotlight { border-left: 6px solid var(--accent-color); padding-left: 1.25rem; }
"#;

/// Renders the full HTML document for `tree` on the given page.
pub fn render_document(tree: &DisplayTree, page: &PageSettings) -> String {
    let css = format!("{}{}", page_rule(page), BASE_CSS);
    let root_class = format!("resume template-{}", template_class(&tree.style));

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { (tree.header.name) }
                style { (PreEscaped(css)) }
            }
            body {
                div class=(root_class) style=(style_variables(&tree.style)) {
                    (render_header(&tree.header, &tree.style))
                    @for section in &tree.sections {
                        (render_section(section))
                    }
                }
            }
        }
    }
    .into_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

fn page_rule(page: &PageSettings) -> String {
    format!(
        "@page {{ size: {} {}; margin: {}in; }}\n",
        page.format.css_keyword(),
        page.orientation.css_keyword(),
        page.margin_in
    )
}

fn template_class(style: &StyleSheet) -> &'static str {
    match style.layout.template {
        Template::Classic => "classic",
        Template::Centered => "centered",
        Template::Spotlight => "spotlight",
    }
}

/// CSS custom properties carrying the resolved style.
pub fn style_variables(style: &StyleSheet) -> String {
    let list_style = match style.bullet.mode {
        ListMode::Native { marker } => marker.css_keyword(),
        ListMode::CustomMarker => "none",
    };
    let marker = css_string(style.bullet.glyph);

    format!(
        "--accent-color: {}; --resume-font: {}; --resume-font-size: {}pt; \
         --resume-line-height: {}; --resume-section-gap: {}rem; \
         --resume-list-style: {}; --resume-marker-symbol: {}; --resume-inline-marker: {}",
        style.accent_color,
        css_string(style.font_family),
        style.font_size_pt,
        style.line_height,
        style.section_gap_rem,
        list_style,
        marker,
        marker,
    )
}

fn css_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn render_header(header: &Header, style: &StyleSheet) -> Markup {
    let align = match style.layout.header_alignment {
        Alignment::Left => "header align-left",
        Alignment::Center => "header align-center",
    };
    let name_class = header.name_is_placeholder.then_some("placeholder");

    html! {
        header class=(align) {
            h1 class=[name_class] { (header.name) }
            @if !header.contact_line.is_empty() {
                div class="contact-line" {
                    @for item in &header.contact_line {
                        @match item {
                            ContactItem::Text { text } => {
                                span { (text) }
                            },
                            ContactItem::Link { label, href } => {
                                span { a href=(href) { (label) } }
                            },
                        }
                    }
                }
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    let class = format!("section section-{}", section_class(section.kind));

    html! {
        section class=(class) {
            h2 { (section.heading) }
            @match &section.body {
                SectionBody::Paragraph(text) => {
                    p { (text) }
                },
                SectionBody::Placeholder(text) => {
                    p class="placeholder" { (text) }
                },
                SectionBody::Articles(articles) => {
                    @for article in articles {
                        (render_article(article))
                    }
                },
                SectionBody::InlineList(items) => {
                    ul class="inline-list" {
                        @for item in items {
                            li { (item) }
                        }
                    }
                },
            }
        }
    }
}

fn section_class(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Summary => "summary",
        SectionKind::Experience => "experience",
        SectionKind::Education => "education",
        SectionKind::Skills => "skills",
        SectionKind::Additional => "additional",
    }
}

fn render_article(article: &Article) -> Markup {
    html! {
        article class="entry" data-entry-id=(article.entry_id.to_string()) {
            header class="entry-header" {
                div {
                    h3 { (article.title) }
                    @if let Some(subheading) = &article.subheading {
                        p class="subheading" { (subheading) }
                    }
                }
                @if !article.meta.is_empty() {
                    div class="meta" {
                        @for item in &article.meta {
                            span { (item) }
                        }
                    }
                }
            }
            @if let Some(bullets) = &article.bullets {
                ul class=(list_class(bullets.marker.mode)) {
                    @for item in &bullets.items {
                        li { (item) }
                    }
                }
            }
            @if let Some(body) = &article.body {
                p { (body) }
            }
        }
    }
}

fn list_class(mode: ListMode) -> &'static str {
    match mode {
        ListMode::CustomMarker => "list list-dash",
        ListMode::Native { .. } => "list",
    }
}
