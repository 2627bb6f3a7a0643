//! Site configuration.
//!
//! Every field defaults to the current published layout, so an empty JSON
//! object (or no config file at all) renders the live site.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::site::contact::ContactMethod;
use crate::site::types::{CompanyVariant, ExperienceVariant, HeroVariant};

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "SITE_CONFIG";

/// Image paths, referenced as-is from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub headshot: String,
    pub logo: String,
    pub collage: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            headshot: "/assets/headshot.jpg".to_string(),
            logo: "/assets/logo.png".to_string(),
            collage: "/assets/collage.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`.
    pub title: String,
    /// `<meta name="description">`.
    pub description: String,
    pub stylesheet: String,
    pub assets: AssetPaths,
    pub hero: HeroVariant,
    pub experience: ExperienceVariant,
    pub company: CompanyVariant,
    pub contact: ContactMethod,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Adam Line | Theatre Producer".to_string(),
            description: "London-based theatre producer.".to_string(),
            stylesheet: "/assets/site.css".to_string(),
            assets: AssetPaths::default(),
            hero: HeroVariant::default(),
            experience: ExperienceVariant::default(),
            company: CompanyVariant::default(),
            contact: ContactMethod::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SiteError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Load from the file named by `SITE_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!("Loading site config from {}", path);
                Self::load(path.trim())
            }
            _ => {
                tracing::debug!("{} not set, using default site config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Reject values that would produce a broken page.
    fn check(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SiteError::config("title must not be empty"));
        }
        match &self.contact {
            ContactMethod::MailtoForm(form) if form.recipient.trim().is_empty() => {
                Err(SiteError::config("mailto_form requires a recipient address"))
            }
            ContactMethod::EmbeddedWidget(widget) if widget.form_id.trim().is_empty() => {
                Err(SiteError::config("embedded_widget requires a form_id"))
            }
            _ => Ok(()),
        }
    }
}
