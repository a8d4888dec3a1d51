//! Forecourt project configuration (forecourt.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use forecourt_theme::{PalettePreset, DEFAULT_SCOPE_ATTR};

/// Name of the project file looked up in the project directory
pub const CONFIG_FILE: &str = "forecourt.toml";

/// Top-level project configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ForecourtConfig {
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
}

/// Tenant storage location
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding tenant entries, relative to the project root
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".forecourt".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Theming defaults for tenants without stored customizations
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Attribute scoping the generated rules
    #[serde(default = "default_scope_attr")]
    pub scope_attr: String,
    /// Stock preset id supplying the default color pair
    #[serde(default = "default_preset")]
    pub preset: String,
}

fn default_scope_attr() -> String {
    DEFAULT_SCOPE_ATTR.to_string()
}

fn default_preset() -> String {
    PalettePreset::default().id().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            scope_attr: default_scope_attr(),
            preset: default_preset(),
        }
    }
}

impl ForecourtConfig {
    /// Load configuration from a project directory.
    ///
    /// A missing forecourt.toml is not an error; defaults apply. A
    /// present but invalid file is.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no project file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ForecourtConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
