//! Declarative validation for registration records.
//!
//! The schema is a fixed, ordered set of per-field rules. Each rule is a pure
//! function from a raw value to either a normalized value or a violation:
//!
//! | Field                | Rule                                   | Normalization          |
//! |----------------------|----------------------------------------|------------------------|
//! | `avatar`             | required, size limit, optional types   | first selected file    |
//! | `name`               | non-empty                              | trim, title-case words |
//! | `email`              | non-empty, email syntax                | trim, lowercase        |
//! | `password`           | minimum length                         | none                   |
//! | `techs`              | minimum count                          | none                   |
//! | `techs[i].title`     | non-empty                              | none                   |
//! | `techs[i].knowledge` | number, integer, within range          | coerce to number       |
//!
//! [`validate_record`] runs every rule and collects every violation, so a
//! caller can show all problems at once.

pub mod errors;
pub mod path;
pub mod rules;
pub mod validation;

pub use errors::{ErrorKind, FieldErrors, RuleViolation, ValidationError, ValidationErrors};
pub use path::{FieldPath, PathParseError, Segment};
pub use rules::{SchemaRules, title_case};
pub use validation::validate_record;
