//! Whole-record validation.

use super::errors::{RuleViolation, ValidationErrors};
use super::path::FieldPath;
use super::rules::{self, SchemaRules};
use crate::record::{NormalizedRecord, Record, TechEntry};

/// Validate a candidate record against the schema.
///
/// Every field is checked, and every violation is collected under its own
/// path; validation never stops at the first failure. On success the
/// normalized record is returned.
pub fn validate_record(rules: &SchemaRules, record: &Record) -> Result<NormalizedRecord, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let avatar = collect(&mut errors, FieldPath::key("avatar"), rules::avatar(rules, &record.avatar));
    let name = collect(&mut errors, FieldPath::key("name"), rules::name(&record.name));
    let email = collect(&mut errors, FieldPath::key("email"), rules::email(&record.email));
    let password =
        collect(&mut errors, FieldPath::key("password"), rules::password(rules, &record.password));
    collect(&mut errors, FieldPath::key("techs"), rules::tech_count(rules, record.techs.len()));

    let mut techs = Vec::with_capacity(record.techs.len());
    for (i, entry) in record.techs.iter().enumerate() {
        let title = collect(&mut errors, FieldPath::tech(i, "title"), rules::title(&entry.title));
        let knowledge = collect(
            &mut errors,
            FieldPath::tech(i, "knowledge"),
            rules::knowledge(rules, &entry.knowledge),
        );
        if let (Some(title), Some(knowledge)) = (title, knowledge) {
            techs.push(TechEntry { title, knowledge });
        }
    }

    match (avatar, name, email, password) {
        (Some(avatar), Some(name), Some(email), Some(password)) if errors.is_empty() => {
            tracing::debug!(techs = techs.len(), "record passed validation");
            Ok(NormalizedRecord { avatar, name, email, password, techs })
        }
        _ => {
            tracing::debug!(errors = errors.len(), "record failed validation");
            Err(errors)
        }
    }
}

/// Keep the value of a passing rule, or record its violation.
fn collect<T>(
    errors: &mut ValidationErrors,
    path: FieldPath,
    result: Result<T, RuleViolation>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            errors.add(path, violation);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FileRef, KnowledgeInput, TechInput};
    use crate::schema::ErrorKind;

    fn valid_record() -> Record {
        Record {
            avatar: vec![FileRef::new("me.png", 1024)],
            name: "  jane doe ".to_string(),
            email: "JANE@X.COM".to_string(),
            password: "secret1".to_string(),
            techs: vec![TechInput::new("go", 5u8), TechInput::new("rust", 8u8)],
        }
    }

    #[test]
    fn test_valid_record_is_normalized() {
        let out = validate_record(&SchemaRules::default(), &valid_record()).unwrap();
        assert_eq!(out.name, "Jane Doe");
        assert_eq!(out.email, "jane@x.com");
        assert_eq!(out.password, "secret1");
        assert_eq!(out.avatar, Some(FileRef::new("me.png", 1024)));
        assert_eq!(
            out.techs,
            vec![
                TechEntry { title: "go".to_string(), knowledge: 5 },
                TechEntry { title: "rust".to_string(), knowledge: 8 },
            ]
        );
    }

    #[test]
    fn test_short_password_is_the_only_error() {
        let record = Record { password: "abc".to_string(), ..valid_record() };
        let errors = validate_record(&SchemaRules::default(), &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        let err = errors.iter().next().unwrap();
        assert_eq!(err.path, FieldPath::key("password"));
        assert_eq!(err.kind, ErrorKind::TooShort);
    }

    #[test]
    fn test_empty_record_reports_every_field() {
        let errors = validate_record(&SchemaRules::default(), &Record::default()).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["avatar", "name", "email", "password", "techs"]);
    }

    #[test]
    fn test_entry_errors_are_indexed() {
        let record = Record {
            techs: vec![
                TechInput::new("go", 5u8),
                TechInput::new("", "abc"),
                TechInput::new("rust", KnowledgeInput::Number(11.0)),
            ],
            ..valid_record()
        };
        let errors = validate_record(&SchemaRules::default(), &record).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["techs[1].title", "techs[1].knowledge", "techs[2].knowledge"]);
    }

    #[test]
    fn test_too_few_techs_alongside_entry_errors() {
        let record = Record { techs: vec![TechInput::new("", 0u8)], ..valid_record() };
        let errors = validate_record(&SchemaRules::default(), &record).unwrap_err();
        assert!(errors.contains(&FieldPath::key("techs")));
        assert!(errors.contains(&FieldPath::tech(0, "title")));
        assert!(errors.contains(&FieldPath::tech(0, "knowledge")));
    }

    #[test]
    fn test_optional_avatar_may_be_absent() {
        let rules = SchemaRules { avatar_required: false, ..SchemaRules::default() };
        let record = Record { avatar: vec![], ..valid_record() };
        let out = validate_record(&rules, &record).unwrap();
        assert!(out.avatar.is_none());
    }
}
