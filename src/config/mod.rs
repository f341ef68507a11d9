use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_MARKER: &str = ".git";

/// What a resolver looks for while walking up.
///
/// ```toml
/// marker = ".hg"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    marker: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn with_marker(marker: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            marker: marker.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let marker = self.marker.as_str();

        if marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }

        if marker == "." || marker == ".." || marker.contains(['/', '\\']) {
            return Err(ConfigError::NotASegment(marker.to_string()));
        }

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: ResolverConfig = toml::from_str(&toml_str).with_context(|| {
            format!(
                "🛑 Corrupted config found at {}\n\
                 → The TOML syntax is invalid or contains unknown keys.\n\
                 → The only supported key is: marker = \".git\"",
                path.display()
            )
        })?;

        config
            .validate()
            .with_context(|| format!("Invalid marker in {}", path.display()))?;

        Ok(config)
    }
}
