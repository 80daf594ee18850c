use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::case::acronym::AcronymSet;
use crate::convert::Style;

/// Conversion settings loaded from a JSON file, e.g.
///
/// ```json
/// { "acronyms": ["HTTP", "JSON"], "default_style": "kebab" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Acronyms honored by every conversion, in priority order
    #[serde(default)]
    pub acronyms: Vec<String>,
    /// Style used when none is given on the command line
    #[serde(default)]
    pub default_style: Option<Style>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON in {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!(
            "Loaded config from {} ({} acronyms)",
            path.display(),
            config.acronyms.len()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        AcronymSet::new(&self.acronyms)?;
        Ok(())
    }

    /// Config acronyms followed by `extra`, so config entries take priority
    /// when matches overlap.
    pub fn acronyms_with(&self, extra: &[String]) -> Vec<String> {
        self.acronyms.iter().chain(extra).cloned().collect()
    }
}
