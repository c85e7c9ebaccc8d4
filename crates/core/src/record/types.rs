use std::fmt;

use serde::{Deserialize, Serialize};

/// A file picked by the user, as reported by a file inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name without directories.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Media type, when known (e.g. "image/png").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size, media_type: None }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Knowledge level as entered: a number, or whatever text was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeInput {
    Number(f64),
    Text(String),
}

impl Default for KnowledgeInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for KnowledgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for KnowledgeInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u8> for KnowledgeInput {
    fn from(n: u8) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for KnowledgeInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for KnowledgeInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One technology row of a candidate record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub knowledge: KnowledgeInput,
}

impl TechInput {
    pub fn new(title: impl Into<String>, knowledge: impl Into<KnowledgeInput>) -> Self {
        Self { title: title.into(), knowledge: knowledge.into() }
    }
}

/// Candidate submission, derived from the form at submit time.
///
/// Nothing here is checked yet; missing fields deserialize to empty values so
/// the validator can report every one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Current file selection. Only the first file is used.
    #[serde(default)]
    pub avatar: Vec<FileRef>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub techs: Vec<TechInput>,
}

/// A validated technology row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEntry {
    pub title: String,
    pub knowledge: u8,
}

/// Record accepted by the validator, with all normalizations applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Absent only when the avatar is optional and nothing was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<FileRef>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechEntry>,
}
