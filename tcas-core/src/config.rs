//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "app": {
//!     "demoMode": false,
//!     "defaultSort": { "key": "gpa", "direction": "desc" }
//!   }
//! }
//! ```
//! Keys this crate does not manage are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::SortConfig;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_sort: Option<SortConfig>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Application configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seed the directory with sample portfolios on startup
    pub demo_mode: bool,
    /// Listing order shown before the first header click
    pub default_sort: SortConfig,
}

impl Config {
    /// Load config from the app directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (`tcas demo on`)
    /// 2. Environment variable TCAS_DEMO_MODE (for CI/testing)
    pub fn load(app_dir: &Path) -> Result<Self> {
        let env_demo = std::env::var("TCAS_DEMO_MODE").ok();
        Self::load_with_demo_env(app_dir, env_demo.as_deref())
    }

    /// `load` with the TCAS_DEMO_MODE value passed in
    fn load_with_demo_env(app_dir: &Path, env_demo: Option<&str>) -> Result<Self> {
        let raw = Self::read_settings(app_dir)?;

        let demo_mode = match env_demo {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            default_sort: raw.app.default_sort.unwrap_or_default(),
        })
    }

    /// Save config to the app directory, preserving unmanaged settings
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");
        let mut settings = Self::read_settings(app_dir)?;

        settings.app.demo_mode = self.demo_mode;
        settings.app.default_sort = Some(self.default_sort);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// A malformed settings file falls back to defaults
    fn read_settings(app_dir: &Path) -> Result<SettingsFile> {
        let settings_path = app_dir.join("settings.json");
        if !settings_path.exists() {
            return Ok(SettingsFile::default());
        }
        let content = std::fs::read_to_string(&settings_path)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}
