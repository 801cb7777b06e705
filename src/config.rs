/// User configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/action-photo/config.json
/// - macOS: ~/Library/Application Support/action-photo/config.json
/// - Windows: %APPDATA%\action-photo\config.json
///
/// A missing file is created with the defaults. A malformed file is reported
/// and ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::theme::Variant;

/// Where the photo catalog comes from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogSpec {
    /// The compiled-in portfolio
    #[default]
    Builtin,
    /// A JSON array of photo records
    Json { path: PathBuf },
    /// A folder of category sub-folders
    Directory { path: PathBuf },
}

/// Two-part wordmark shown in the navbar and footer, e.g. ACTION / PHOTO
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Brand(pub String, pub String);

impl Brand {
    /// Title-case name for running text, e.g. "Action Photo"
    pub fn display_name(&self) -> String {
        [self.0.as_str(), self.1.as_str()]
            .into_iter()
            .flat_map(str::split_whitespace)
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl Default for Brand {
    fn default() -> Self {
        Brand("ACTION".to_string(), "PHOTO".to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Visual theme preset
    pub variant: Variant,
    pub brand: Brand,
    /// How long the loading splash stays up (0 disables it)
    pub splash_millis: u64,
    pub catalog: CatalogSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            brand: Brand::default(),
            splash_millis: 1500,
            catalog: CatalogSpec::default(),
        }
    }
}

impl Config {
    /// Get the path where the config file lives
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("action-photo").join("config.json"))
    }

    /// Load the user config, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("⚠️  No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            let config = Self::default();
            match config.save_to(&path) {
                Ok(()) => tracing::info!("⚙️  Wrote default config to {}", path.display()),
                Err(e) => tracing::warn!("⚠️  Could not write default config: {}", e),
            }
            return config;
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("⚠️  Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
