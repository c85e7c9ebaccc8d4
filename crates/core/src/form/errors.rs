//! Errors raised when updating form state.

use thiserror::Error;

use crate::ids::EntryId;
use crate::schema::FieldPath;

/// Misuse of the form API. User input problems are validation errors, not these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Path does not name a form field.
    #[error("unknown field: {0}")]
    UnknownField(FieldPath),

    /// No row carries this identity.
    #[error("no technology entry with id {0}")]
    UnknownEntry(EntryId),

    /// No row at this position.
    #[error("no technology entry at position {0}")]
    NoEntryAt(usize),

    /// Value kind does not fit the field (e.g. files for a text field).
    #[error("field '{path}' expects {expected}")]
    ValueKind { path: FieldPath, expected: &'static str },
}
