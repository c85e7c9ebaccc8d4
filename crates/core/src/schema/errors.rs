//! Validation error types.

use serde::Serialize;
use thiserror::Error;

use super::path::FieldPath;

/// Machine-readable category of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value is missing or empty.
    Required,
    /// File exceeds the size limit.
    TooLarge,
    /// File media type is not accepted.
    UnsupportedType,
    /// Text is shorter than the minimum length.
    TooShort,
    /// List has fewer items than required.
    TooFew,
    /// Text is not a valid email address.
    InvalidEmail,
    /// Value cannot be read as a number.
    NotANumber,
    /// Number has a fractional part.
    NotAnInteger,
    /// Number is outside the allowed range.
    OutOfRange,
}

/// A rule failure that has not been attached to a field yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub kind: ErrorKind,
    pub message: String,
}

impl RuleViolation {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Attach this violation to a field.
    pub fn at(self, path: FieldPath) -> ValidationError {
        ValidationError { path, kind: self.kind, message: self.message }
    }
}

/// A violation on a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: FieldPath,
    pub kind: ErrorKind,
    pub message: String,
}

/// Every violation found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Record `violation` under `path`.
    pub fn add(&mut self, path: FieldPath, violation: RuleViolation) {
        self.push(violation.at(path));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// First error reported for `path`.
    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.0.iter().find(|e| &e.path == path)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.get(path).is_some()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Error messages keyed by field path, one message per field.
///
/// This is what a form shows next to its inputs. Entries keep the order they
/// were inserted in, which for errors built from [`ValidationErrors`] is the
/// order of the fields in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(FieldPath, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        self.0.iter().find(|(p, _)| p == path).map(|(_, m)| m.as_str())
    }

    /// Set the message for `path`. A new path goes last; an existing one
    /// keeps its place.
    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter().position(|(p, _)| *p == path) {
            Some(i) => self.0[i].1 = message,
            None => self.0.push((path, message)),
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.0.iter().map(|(p, m)| (p, m.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = Self::new();
        for error in errors {
            if fields.get(&error.path).is_none() {
                fields.insert(error.path.clone(), error.message.clone());
            }
        }
        fields
    }
}
