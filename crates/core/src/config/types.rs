use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::schema::SchemaRules;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Number of blank technology rows a new form starts with.
    #[serde(default = "default_initial_techs")]
    pub initial_techs: usize,
    /// Format of the preview printed after a successful submit.
    #[serde(default)]
    pub preview: PreviewFormat,
    /// Validation limits.
    #[serde(default)]
    pub schema: SchemaRules,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            initial_techs: default_initial_techs(),
            preview: PreviewFormat::default(),
            schema: SchemaRules::default(),
        }
    }
}

fn default_initial_techs() -> usize {
    1
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    #[default]
    Json,
    Yaml,
}

impl PreviewFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Config file the values came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub initial_techs: usize,
    pub preview: PreviewFormat,
    pub schema: SchemaRules,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Built-in settings used when no config file exists.
    pub fn builtin() -> Self {
        let profile = Profile::default();
        Self {
            active_profile: "default".to_string(),
            source: None,
            initial_techs: profile.initial_techs,
            preview: profile.preview,
            schema: profile.schema,
            logging: LoggingConfig::default(),
        }
    }
}
