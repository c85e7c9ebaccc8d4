//! Shared output formatting for previews and validation errors.

use signup_core::config::types::PreviewFormat;
use signup_core::form::SubmitSink;
use signup_core::record::NormalizedRecord;
use signup_core::schema::{FieldErrors, ValidationErrors};
use tabled::{Table, Tabled, settings::Style};

/// Row for the error table.
#[derive(Tabled)]
struct ErrorRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Problem")]
    message: String,
}

/// Render an accepted record for display. The password is masked.
pub fn render_preview(record: &NormalizedRecord, format: PreviewFormat) -> String {
    let mut masked = record.clone();
    masked.password = "*".repeat(record.password.chars().count());

    let rendered = match format {
        PreviewFormat::Json => serde_json::to_string_pretty(&masked).map_err(|e| e.to_string()),
        PreviewFormat::Yaml => serde_yaml::to_string(&masked).map_err(|e| e.to_string()),
    };
    rendered.unwrap_or_else(|e| format!("failed to render preview: {e}"))
}

/// Render field errors as a table.
pub fn render_errors_table<'a>(errors: impl IntoIterator<Item = (String, &'a str)>) -> String {
    let rows: Vec<ErrorRow> = errors
        .into_iter()
        .map(|(field, message)| ErrorRow { field, message: message.to_string() })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn print_validation_errors(errors: &ValidationErrors) {
    let table =
        render_errors_table(errors.iter().map(|e| (e.path.to_string(), e.message.as_str())));
    println!("{table}");
}

/// Header plus table for the errors a rejected form shows, in form order.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let table = render_errors_table(errors.iter().map(|(p, m)| (p.to_string(), m)));
    format!("The form has {} problem(s):\n{table}", errors.len())
}

/// Sink that prints the preview on success and the error table on failure.
pub struct PrintSink {
    pub format: PreviewFormat,
}

impl SubmitSink for PrintSink {
    fn on_valid(&mut self, record: &NormalizedRecord) {
        println!("{}", render_preview(record, self.format));
    }

    fn on_invalid(&mut self, errors: &FieldErrors) {
        eprintln!("{}", render_field_errors(errors));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::record::{FileRef, TechEntry};
    use signup_core::schema::FieldPath;

    fn record() -> NormalizedRecord {
        NormalizedRecord {
            avatar: Some(FileRef::new("me.png", 1024)),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            techs: vec![TechEntry { title: "go".to_string(), knowledge: 5 }],
        }
    }

    #[test]
    fn test_preview_masks_password() {
        let out = render_preview(&record(), PreviewFormat::Json);
        assert!(out.contains("\"name\": \"Jane Doe\""));
        assert!(out.contains("\"password\": \"*******\""));
        assert!(!out.contains("secret1"));
    }

    #[test]
    fn test_yaml_preview() {
        let out = render_preview(&record(), PreviewFormat::Yaml);
        assert!(out.contains("jane@x.com"));
        assert!(out.contains("- title: go"));
    }

    #[test]
    fn test_errors_table_lists_every_field() {
        let out = render_errors_table(vec![
            ("name".to_string(), "name is required"),
            ("techs[0].title".to_string(), "title is required"),
        ]);
        assert!(out.contains("Field"));
        assert!(out.contains("techs[0].title"));
        assert!(out.contains("name is required"));
    }

    #[test]
    fn test_field_errors_render_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::key("name"), "name is required");
        errors.insert(FieldPath::key("email"), "email is required");
        errors.insert(FieldPath::tech(0, "title"), "title is required");

        let out = render_field_errors(&errors);
        assert!(out.starts_with("The form has 3 problem(s):\n"));
        let name = out.find("name is required").unwrap();
        let email = out.find("email is required").unwrap();
        let title = out.find("title is required").unwrap();
        assert!(name < email && email < title);
    }

    #[test]
    fn test_errors_table_layout() {
        let out = render_errors_table(vec![("name".to_string(), "name is required")]);
        insta::assert_snapshot!(out, @r"
        ╭───────┬──────────────────╮
        │ Field │ Problem          │
        ├───────┼──────────────────┤
        │ name  │ name is required │
        ╰───────┴──────────────────╯
        ");
    }
}
