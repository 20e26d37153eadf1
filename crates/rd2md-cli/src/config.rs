//! Configuration file support for the rd2md CLI
//!
//! Loads settings from a `_rd2md.toml` file next to the input.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_rd2md.toml";

/// Schema URL for the configuration file
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/rd2md/rd2md/refs/heads/main/rd2md.schema.json";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output file configuration
    #[serde(skip_serializing_if = "OutputConfig::is_empty")]
    pub output: OutputConfig,
    /// Class document detection configuration
    #[serde(skip_serializing_if = "ClassesConfig::is_empty")]
    pub classes: ClassesConfig,
}

/// Output file configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension for generated files, including the leading dot (default: ".md")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl OutputConfig {
    fn is_empty(&self) -> bool {
        self.extension.is_none()
    }
}

/// Class document detection configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClassesConfig {
    /// Treat files whose stem starts with an uppercase letter as class docs (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// File stems to always treat as class docs, regardless of `auto`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
}

impl ClassesConfig {
    fn is_empty(&self) -> bool {
        self.auto.is_none() && self.names.is_empty()
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `_rd2md.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Extension for generated files, including the leading dot
    pub fn output_extension(&self) -> &str {
        self.output.extension.as_deref().unwrap_or(".md")
    }

    /// Whether the file with this stem documents a class
    pub fn is_class(&self, stem: &str) -> bool {
        if self.classes.names.iter().any(|n| n == stem) {
            return true;
        }
        self.classes.auto.unwrap_or(true)
            && stem.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        let schema = Self::json_schema();
        serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")
    }

    /// Serialize configuration to TOML string with schema directive
    pub fn to_toml_with_schema(&self) -> Result<String> {
        let toml_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        Ok(format!("#:schema {}\n\n{}", SCHEMA_URL, toml_content))
    }

    /// Create a sample configuration for the init command
    pub fn sample() -> Self {
        Config {
            output: OutputConfig {
                extension: Some(".md".to_string()),
            },
            classes: ClassesConfig {
                auto: Some(true),
                names: Vec::new(),
            },
        }
    }
}
