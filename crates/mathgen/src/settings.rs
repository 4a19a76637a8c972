use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compiler::error::Result;

/// Generator settings, stored as TOML next to the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// One level of indentation inside emitted helper routines
    pub indent: String,
    /// Identifiers owned by the surrounding program that generated names must avoid
    pub reserved_words: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            reserved_words: Vec::new(),
        }
    }
}

impl GeneratorSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from the given path, or return default if not found or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default generator settings");
                Self::default()
            }
        }
    }

    /// Save settings to the given path, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;
        Ok(())
    }
}
