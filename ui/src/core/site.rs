//! Site configuration: title, tagline and optional banner image.
//!
//! The configuration ships with the crate (`assets/site.json`) and is parsed
//! exactly once. A broken file never takes the homepage down: the loader logs
//! and falls back to [`SiteConfig::default`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fixed target of the homepage "Get Started" action.
pub const GET_STARTED_PATH: &str = "/docs/intro";

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has an empty title")]
    MissingTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
}

impl CustomFields {
    /// Banner image URL as configured. Only an empty string counts as no image.
    pub fn banner_image(&self) -> Option<&str> {
        self.banner_image.as_deref().filter(|url| !url.is_empty())
    }
}

impl SiteConfig {
    pub fn new(title: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            custom_fields: CustomFields::default(),
        }
    }

    pub fn with_banner_image<T: Into<String>>(mut self, url: T) -> Self {
        self.custom_fields.banner_image = Some(url.into());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.title.trim().is_empty() {
            return Err(ConfigError::MissingTitle);
        }
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("Docs", "")
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!("[site] Failed loading site config ({err}); using defaults");
        SiteConfig::default()
    }
});

/// The embedded site configuration, loaded on first access.
pub fn config() -> &'static SiteConfig {
    &SITE
}
