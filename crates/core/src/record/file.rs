//! Loading candidate records from JSON or YAML files.
//!
//! Avatar entries in a record file may be inline file descriptions
//! (`{name, size, type}`) or paths. Paths are resolved relative to the
//! record file and inspected, so the validator sees real sizes.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::types::{FileRef, Record, TechInput};
use crate::inspect::{FileInspector, InspectError};

#[derive(Debug, Error)]
pub enum RecordFileError {
    #[error("failed to read record file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    Json(String, #[source] serde_json::Error),

    #[error("failed to parse YAML in {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),

    #[error("avatar '{0}': {1}")]
    Avatar(String, #[source] InspectError),
}

/// On-disk shape of a record.
#[derive(Debug, Deserialize)]
struct RecordDoc {
    #[serde(default)]
    avatar: AvatarDoc,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    techs: Vec<TechInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum AvatarDoc {
    #[default]
    Empty,
    Many(Vec<AvatarSource>),
    One(AvatarSource),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AvatarSource {
    File(FileRef),
    Path(String),
}

/// Source format of a record document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Json,
    Yaml,
}

impl DocFormat {
    /// Pick the format from a file extension; anything but yaml/yml is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read and parse a record file, inspecting any avatar paths.
pub fn load_record(path: &Path, inspector: &dyn FileInspector) -> Result<Record, RecordFileError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RecordFileError::Read(path.display().to_string(), e))?;
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    parse_record(&content, DocFormat::from_path(path), &base, inspector)
        .map_err(|e| match e {
            RecordFileError::Json(_, err) => RecordFileError::Json(path.display().to_string(), err),
            RecordFileError::Yaml(_, err) => RecordFileError::Yaml(path.display().to_string(), err),
            other => other,
        })
}

/// Parse a record document. Relative avatar paths are joined onto `base`.
pub fn parse_record(
    content: &str,
    format: DocFormat,
    base: &Path,
    inspector: &dyn FileInspector,
) -> Result<Record, RecordFileError> {
    let doc: RecordDoc = match format {
        DocFormat::Json => serde_json::from_str(content)
            .map_err(|e| RecordFileError::Json("<input>".to_string(), e))?,
        DocFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| RecordFileError::Yaml("<input>".to_string(), e))?,
    };

    let sources = match doc.avatar {
        AvatarDoc::Empty => Vec::new(),
        AvatarDoc::Many(sources) => sources,
        AvatarDoc::One(source) => vec![source],
    };

    let mut avatar = Vec::with_capacity(sources.len());
    for source in sources {
        match source {
            AvatarSource::File(file) => avatar.push(file),
            AvatarSource::Path(p) => {
                let full = resolve(base, &p);
                let file = inspector
                    .inspect(&full)
                    .map_err(|e| RecordFileError::Avatar(p.clone(), e))?;
                avatar.push(file);
            }
        }
    }

    Ok(Record {
        avatar,
        name: doc.name,
        email: doc.email,
        password: doc.password,
        techs: doc.techs,
    })
}

fn resolve(base: &Path, p: &str) -> PathBuf {
    let path = Path::new(p);
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
