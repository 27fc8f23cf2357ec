use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// =============================================================================
// Demo configuration (TOML)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the `reverse_demo` binary. Every field is optional in the
/// file; missing fields fall back to [`DemoConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sequences: Vec<Vec<i64>>,
    pub format: OutputFormat,
    pub show_links: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            sequences: vec![vec![1, 2, 3, 4, 5], vec![], vec![7], vec![1, 2]],
            format: OutputFormat::Text,
            show_links: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequences.is_empty() {
            return Err(ConfigError::invalid(
                "sequences",
                "at least one sequence is required",
            ));
        }
        Ok(())
    }
}
