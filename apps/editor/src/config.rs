use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::page::{default_page_settings, Orientation, PageSettings, PaperFormat};

const DEFAULT_EXPORT_DIR: &str = "./exports";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Editor configuration loaded from environment variables.
/// Every variable is optional; unset variables fall back to defaults, malformed ones
/// are reported as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory the file exporter writes into.
    pub export_dir: PathBuf,
    pub page: PageSettings,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            page: default_page_settings(),
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let format = match lookup("RESUME_PAGE_FORMAT") {
            Some(raw) => raw
                .parse::<PaperFormat>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_PAGE_FORMAT is invalid")?,
            None => defaults.page.format,
        };

        let orientation = match lookup("RESUME_PAGE_ORIENTATION") {
            Some(raw) => raw
                .parse::<Orientation>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_PAGE_ORIENTATION is invalid")?,
            None => defaults.page.orientation,
        };

        let margin_in = match lookup("RESUME_PAGE_MARGIN_IN") {
            Some(raw) => parse_margin(&raw)?,
            None => defaults.page.margin_in,
        };

        Ok(Config {
            export_dir: lookup("RESUME_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            page: PageSettings {
                format,
                orientation,
                margin_in,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_margin(raw: &str) -> Result<f32> {
    let margin = raw
        .trim()
        .parse::<f32>()
        .with_context(|| format!("RESUME_PAGE_MARGIN_IN must be a number, got '{raw}'"))?;
    if !margin.is_finite() || margin < 0.0 {
        anyhow::bail!("RESUME_PAGE_MARGIN_IN must be a non-negative number, got '{raw}'");
    }
    Ok(margin)
}
