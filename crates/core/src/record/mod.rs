//! Registration records: the raw candidate built from form input and the
//! normalized record produced by a successful validation.

pub mod file;
pub mod types;

pub use file::{DocFormat, RecordFileError, load_record, parse_record};
pub use types::{FileRef, KnowledgeInput, NormalizedRecord, Record, TechEntry, TechInput};
