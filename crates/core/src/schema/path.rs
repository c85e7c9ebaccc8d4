//! Field paths such as `name` or `techs[1].title`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// Path to a top-level field.
    pub fn key(name: impl Into<String>) -> Self {
        Self(vec![Segment::Key(name.into())])
    }

    /// Path to a sub-field of the technology row at `index`.
    pub fn tech(index: usize, field: &str) -> Self {
        Self::key("techs").index(index).child(field)
    }

    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.0.push(Segment::Key(name.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Segment::Index(index));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `prefix` is a leading part of this path (or equal to it).
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(k) if i == 0 => write!(f, "{k}")?,
                Segment::Key(k) => write!(f, ".{k}")?,
                Segment::Index(n) => write!(f, "[{n}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field path '{input}': {reason}")]
pub struct PathParseError {
    pub input: String,
    pub reason: &'static str,
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| PathParseError { input: s.to_string(), reason };

        let mut segments = Vec::new();
        let mut rest = s;
        let mut first = true;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('[') {
                let close = after.find(']').ok_or_else(|| fail("unclosed '['"))?;
                let index = after[..close].parse::<usize>().map_err(|_| fail("index must be a number"))?;
                segments.push(Segment::Index(index));
                rest = &after[close + 1..];
            } else {
                let body = if first {
                    rest
                } else {
                    rest.strip_prefix('.').ok_or_else(|| fail("expected '.' or '['"))?
                };
                let end = body.find(['.', '[']).unwrap_or(body.len());
                let key = &body[..end];
                if key.is_empty() {
                    return Err(fail("empty key"));
                }
                segments.push(Segment::Key(key.to_string()));
                rest = &body[end..];
            }
            first = false;
        }

        if segments.is_empty() {
            return Err(fail("empty path"));
        }
        Ok(Self(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_path() {
        assert_eq!(FieldPath::key("name").to_string(), "name");
        assert_eq!(FieldPath::tech(1, "title").to_string(), "techs[1].title");
        assert_eq!(FieldPath::key("techs").index(0).to_string(), "techs[0]");
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!("email".parse::<FieldPath>().unwrap(), FieldPath::key("email"));
        assert_eq!(
            "techs[12].knowledge".parse::<FieldPath>().unwrap(),
            FieldPath::tech(12, "knowledge")
        );
        assert_eq!(
            "a[0][1].b".parse::<FieldPath>().unwrap(),
            FieldPath::key("a").index(0).index(1).child("b")
        );
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        assert!("".parse::<FieldPath>().is_err());
        assert!("techs[".parse::<FieldPath>().is_err());
        assert!("techs[x]".parse::<FieldPath>().is_err());
        assert!("techs[0]title".parse::<FieldPath>().is_err());
        assert!("name.".parse::<FieldPath>().is_err());
        assert!(".name".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_starts_with() {
        let techs = FieldPath::key("techs");
        assert!(FieldPath::tech(3, "title").starts_with(&techs));
        assert!(techs.starts_with(&techs));
        assert!(!FieldPath::key("name").starts_with(&techs));
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&FieldPath::tech(0, "title")).unwrap();
        assert_eq!(json, "\"techs[0].title\"");
    }
}
