//! Per-field rules.
//!
//! Every rule is a pure function taking the raw value (and the configured
//! limits) and returning the normalized value or a [`RuleViolation`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{ErrorKind, RuleViolation};
use crate::record::{FileRef, KnowledgeInput};

/// 5 MiB.
pub const DEFAULT_AVATAR_MAX_BYTES: u64 = 5_242_880;

// Local part: dot-separated atoms. Domain: two or more dot-separated labels,
// each alphanumeric at both ends with inner hyphens allowed.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",
    )
    .unwrap()
});

/// Tunable limits for the registration schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaRules {
    /// Whether an avatar must be selected.
    pub avatar_required: bool,
    /// Largest accepted avatar, in bytes.
    pub avatar_max_bytes: u64,
    /// Accepted media type prefixes (e.g. "image/"). Empty accepts anything.
    pub avatar_accept: Vec<String>,
    /// Minimum password length, in characters.
    pub password_min_len: usize,
    /// Minimum number of technology rows.
    pub min_techs: usize,
    /// Lowest accepted knowledge level.
    pub knowledge_min: u8,
    /// Highest accepted knowledge level.
    pub knowledge_max: u8,
}

impl Default for SchemaRules {
    fn default() -> Self {
        Self {
            avatar_required: true,
            avatar_max_bytes: DEFAULT_AVATAR_MAX_BYTES,
            avatar_accept: Vec::new(),
            password_min_len: 6,
            min_techs: 2,
            knowledge_min: 1,
            knowledge_max: 10,
        }
    }
}

impl SchemaRules {
    /// Check that the limits are consistent with each other.
    pub fn check(&self) -> Result<(), String> {
        if self.knowledge_min > self.knowledge_max {
            return Err(format!(
                "knowledge_min ({}) is greater than knowledge_max ({})",
                self.knowledge_min, self.knowledge_max
            ));
        }
        if self.avatar_max_bytes == 0 {
            return Err("avatar_max_bytes must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Pick the first selected file and check it.
///
/// Returns `Ok(None)` only when the avatar is optional and nothing was selected.
pub fn avatar(rules: &SchemaRules, selection: &[FileRef]) -> Result<Option<FileRef>, RuleViolation> {
    let Some(file) = selection.first() else {
        return if rules.avatar_required {
            Err(RuleViolation::new(ErrorKind::Required, "avatar is required"))
        } else {
            Ok(None)
        };
    };

    if file.size > rules.avatar_max_bytes {
        return Err(RuleViolation::new(
            ErrorKind::TooLarge,
            format!("avatar must be at most {}", human_size(rules.avatar_max_bytes)),
        ));
    }

    if !rules.avatar_accept.is_empty() {
        let accepted = file
            .media_type
            .as_deref()
            .is_some_and(|t| rules.avatar_accept.iter().any(|prefix| t.starts_with(prefix.as_str())));
        if !accepted {
            return Err(RuleViolation::new(
                ErrorKind::UnsupportedType,
                format!("avatar must be one of: {}", rules.avatar_accept.join(", ")),
            ));
        }
    }

    Ok(Some(file.clone()))
}

/// Trim and title-case a name.
pub fn name(raw: &str) -> Result<String, RuleViolation> {
    let normalized = title_case(raw);
    if normalized.is_empty() {
        return Err(RuleViolation::new(ErrorKind::Required, "name is required"));
    }
    Ok(normalized)
}

/// Check email syntax and lowercase it.
pub fn email(raw: &str) -> Result<String, RuleViolation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RuleViolation::new(ErrorKind::Required, "email is required"));
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(RuleViolation::new(ErrorKind::InvalidEmail, "email must be a valid email address"));
    }
    Ok(trimmed.to_lowercase())
}

/// Check the password length. The password is kept as typed.
pub fn password(rules: &SchemaRules, raw: &str) -> Result<String, RuleViolation> {
    if raw.is_empty() {
        return Err(RuleViolation::new(ErrorKind::Required, "password is required"));
    }
    if raw.chars().count() < rules.password_min_len {
        return Err(RuleViolation::new(
            ErrorKind::TooShort,
            format!("password must be at least {} characters", rules.password_min_len),
        ));
    }
    Ok(raw.to_string())
}

/// Check the number of technology rows.
pub fn tech_count(rules: &SchemaRules, count: usize) -> Result<(), RuleViolation> {
    if count < rules.min_techs {
        return Err(RuleViolation::new(
            ErrorKind::TooFew,
            format!("at least {} technologies are required", rules.min_techs),
        ));
    }
    Ok(())
}

/// Technology titles only need to be present.
pub fn title(raw: &str) -> Result<String, RuleViolation> {
    if raw.trim().is_empty() {
        return Err(RuleViolation::new(ErrorKind::Required, "title is required"));
    }
    Ok(raw.to_string())
}

/// Coerce a knowledge level to an integer within the configured range.
pub fn knowledge(rules: &SchemaRules, raw: &KnowledgeInput) -> Result<u8, RuleViolation> {
    let value = match raw {
        KnowledgeInput::Number(n) => *n,
        KnowledgeInput::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(RuleViolation::new(ErrorKind::Required, "knowledge is required"));
            }
            s.parse::<f64>().map_err(|_| not_a_number())?
        }
    };

    if !value.is_finite() {
        return Err(not_a_number());
    }
    if value.fract() != 0.0 {
        return Err(RuleViolation::new(ErrorKind::NotAnInteger, "knowledge must be an integer"));
    }

    let (min, max) = (rules.knowledge_min, rules.knowledge_max);
    if value < f64::from(min) || value > f64::from(max) {
        return Err(RuleViolation::new(
            ErrorKind::OutOfRange,
            format!("knowledge must be between {min} and {max}"),
        ));
    }

    // In range, so it fits in a u8.
    Ok(value as u8)
}

fn not_a_number() -> RuleViolation {
    RuleViolation::new(ErrorKind::NotANumber, "knowledge must be a number")
}

/// Capitalize the first letter of every whitespace-separated word.
///
/// Leading, trailing and repeated whitespace is dropped; words are re-joined
/// with single spaces. The rest of each word is left as typed.
///
/// # Examples
/// ```
/// use signup_core::schema::title_case;
///
/// assert_eq!(title_case("  jane doe "), "Jane Doe");
/// assert_eq!(title_case("jane  doe"), "Jane Doe");
/// assert_eq!(title_case("mcDonald"), "McDonald");
/// assert_eq!(title_case("   "), "");
/// ```
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn human_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes % KIB == 0 {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}
