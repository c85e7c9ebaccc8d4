//! File inspection for the avatar field.
//!
//! The form never opens the selected file. It only needs a name, a size and
//! (when it can be guessed) a media type, which is what [`FileInspector`]
//! reports.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::FileRef;

/// Errors reported while inspecting a selected file.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read metadata for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Turns a path chosen by the user into a [`FileRef`].
pub trait FileInspector {
    fn inspect(&self, path: &Path) -> Result<FileRef, InspectError>;
}

/// Inspector backed by filesystem metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsInspector;

impl FileInspector for FsInspector {
    fn inspect(&self, path: &Path) -> Result<FileRef, InspectError> {
        let meta = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InspectError::NotFound(path.to_path_buf())
            } else {
                InspectError::Io { path: path.to_path_buf(), source: e }
            }
        })?;

        if !meta.is_file() {
            return Err(InspectError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let file = FileRef { name, size: meta.len(), media_type: None };
        let file = match guess_media_type(path) {
            Some(media_type) => file.with_media_type(media_type),
            None => file,
        };

        tracing::debug!(path = %path.display(), size = file.size, "inspected avatar file");
        Ok(file)
    }
}

/// Guess an image media type from the file extension.
pub fn guess_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_regular_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("me.PNG");
        std::fs::write(&path, vec![0u8; 1024]).unwrap();

        let file = FsInspector.inspect(&path).unwrap();
        assert_eq!(file.name, "me.PNG");
        assert_eq!(file.size, 1024);
        assert_eq!(file.media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        let err = FsInspector.inspect(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, InspectError::NotFound(_)));
    }

    #[test]
    fn test_inspect_directory() {
        let dir = tempdir().unwrap();
        let err = FsInspector.inspect(dir.path()).unwrap_err();
        assert!(matches!(err, InspectError::NotAFile(_)));
    }

    #[test]
    fn test_guess_media_type() {
        assert_eq!(guess_media_type(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(guess_media_type(Path::new("a.JPEG")), Some("image/jpeg"));
        assert_eq!(guess_media_type(Path::new("a.txt")), None);
        assert_eq!(guess_media_type(Path::new("noext")), None);
    }
}
