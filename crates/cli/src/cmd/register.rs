//! Register command implementation.
//!
//! Values come from flags first. In an interactive terminal the remaining
//! fields are prompted for, and a rejected submit offers to fix the flagged
//! fields, add or remove a technology, or give up.

use std::path::Path;

use signup_core::config::loader::ConfigLoader;
use signup_core::config::types::PreviewFormat;
use signup_core::form::{EntryField, FieldValue, FormController, FormError, SubmitOutcome};
use signup_core::ids::EntryId;
use signup_core::inspect::{FileInspector, FsInspector};
use signup_core::schema::{FieldPath, Segment};

use crate::RegisterArgs;
use crate::cmd::output::PrintSink;
use crate::prompt::{
    PromptError, PromptOptions, confirm, parse_tech_arg, prompt_password, prompt_text, select,
};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: RegisterArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc, true);

    let format = args.format.map(PreviewFormat::from).unwrap_or(rc.preview);
    let options = PromptOptions { batch_mode: args.batch };

    let initial = if args.techs.is_empty() { rc.initial_techs } else { 0 };
    let mut form = FormController::with_initial_entries(rc.schema.clone(), initial);

    if let Err(e) = apply_args(&mut form, &args, &FsInspector) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut sink = PrintSink { format };
    let outcome = if options.is_interactive() {
        match run_interactive(&mut form, &mut sink, &FsInspector) {
            Ok(outcome) => outcome,
            Err(PromptError::Cancelled) => {
                eprintln!("Registration cancelled.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        form.submit(&mut sink)
    };

    if outcome == SubmitOutcome::Invalid {
        std::process::exit(1);
    }
}

/// Copy flag values into the form.
fn apply_args(
    form: &mut FormController,
    args: &RegisterArgs,
    inspector: &dyn FileInspector,
) -> Result<(), FormError> {
    let text_fields = [("name", &args.name), ("email", &args.email), ("password", &args.password)];
    for (key, value) in text_fields {
        if let Some(value) = value {
            form.set_field(&FieldPath::key(key), FieldValue::from(value.as_str()))?;
        }
    }

    if let Some(path) = &args.avatar {
        match inspector.inspect(path) {
            Ok(file) => form.set_field(&FieldPath::key("avatar"), file.into())?,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "avatar not attached");
                eprintln!("Warning: {e}");
            }
        }
    }

    for arg in &args.techs {
        let (title, knowledge) = parse_tech_arg(arg);
        let id = form.add_entry();
        form.set_entry_field(id, EntryField::Title, title.into())?;
        form.set_entry_field(id, EntryField::Knowledge, knowledge.into())?;
    }

    Ok(())
}

fn run_interactive(
    form: &mut FormController,
    sink: &mut PrintSink,
    inspector: &dyn FileInspector,
) -> Result<SubmitOutcome, PromptError> {
    fill_missing(form, inspector)?;

    loop {
        if form.submit(sink) == SubmitOutcome::Valid {
            return Ok(SubmitOutcome::Valid);
        }

        let choices = [
            "Fix the fields above".to_string(),
            "Add a technology".to_string(),
            "Remove a technology".to_string(),
            "Cancel".to_string(),
        ];
        match select("What next?", &choices)? {
            Some(0) => fix_errors(form, inspector)?,
            Some(1) => add_tech(form)?,
            Some(2) => remove_tech(form)?,
            _ => return Err(PromptError::Cancelled),
        }
    }
}

/// Prompt for every field that is still empty.
fn fill_missing(form: &mut FormController, inspector: &dyn FileInspector) -> Result<(), PromptError> {
    if form.state().avatar.is_empty() {
        prompt_avatar(form, inspector)?;
    }
    for key in ["name", "email", "password"] {
        let empty = match key {
            "name" => form.state().name.is_empty(),
            "email" => form.state().email.is_empty(),
            _ => form.state().password.is_empty(),
        };
        if empty {
            prompt_top_level(form, key)?;
        }
    }

    let blank: Vec<EntryId> = form
        .state()
        .techs()
        .iter()
        .filter(|row| row.title.is_empty())
        .map(|row| row.id)
        .collect();
    for id in blank {
        prompt_entry(form, id)?;
    }

    while confirm("Add another technology?", false)? {
        add_tech(form)?;
    }
    Ok(())
}

/// Re-prompt every field that currently has an error.
fn fix_errors(form: &mut FormController, inspector: &dyn FileInspector) -> Result<(), PromptError> {
    let paths: Vec<FieldPath> = form.errors().iter().map(|(path, _)| path.clone()).collect();

    for path in paths {
        match path.segments() {
            [Segment::Key(key)] if key == "avatar" => prompt_avatar(form, inspector)?,
            [Segment::Key(key)] if key == "techs" => {
                while form.state().techs().len() < form.rules().min_techs {
                    add_tech(form)?;
                }
            }
            [Segment::Key(key)] => prompt_top_level(form, key)?,
            [Segment::Key(_), Segment::Index(index), Segment::Key(sub)] => {
                let Some(id) = form.state().techs().get(*index).map(|row| row.id) else {
                    continue;
                };
                let Ok(field) = sub.parse::<EntryField>() else {
                    continue;
                };
                prompt_entry_field(form, id, field)?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn prompt_top_level(form: &mut FormController, key: &str) -> Result<(), PromptError> {
    let value = match key {
        "password" => prompt_password("Password")?,
        "name" => prompt_text("Name", &form.state().name)?,
        "email" => prompt_text("Email", &form.state().email)?,
        _ => return Ok(()),
    };
    set_or_warn(form.set_field(&FieldPath::key(key), value.into()));
    Ok(())
}

/// Ask for an avatar path until one can be attached or the answer is empty.
fn prompt_avatar(form: &mut FormController, inspector: &dyn FileInspector) -> Result<(), PromptError> {
    loop {
        let input = prompt_text("Avatar image path (empty to skip)", "")?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        match inspector.inspect(Path::new(input)) {
            Ok(file) => {
                set_or_warn(form.set_field(&FieldPath::key("avatar"), file.into()));
                return Ok(());
            }
            Err(e) => eprintln!("  {e}"),
        }
    }
}

fn prompt_entry(form: &mut FormController, id: EntryId) -> Result<(), PromptError> {
    prompt_entry_field(form, id, EntryField::Title)?;
    prompt_entry_field(form, id, EntryField::Knowledge)
}

fn prompt_entry_field(
    form: &mut FormController,
    id: EntryId,
    field: EntryField,
) -> Result<(), PromptError> {
    let Some(row) = form.state().entry(id) else {
        return Ok(());
    };
    let (label, current) = match field {
        EntryField::Title => (format!("{id} title"), row.title.clone()),
        EntryField::Knowledge => {
            let current = row.knowledge.to_string();
            (format!("{id} knowledge ({}-{})", form.rules().knowledge_min, form.rules().knowledge_max), current)
        }
    };
    let value = prompt_text(&label, &current)?;
    set_or_warn(form.set_entry_field(id, field, value.into()));
    Ok(())
}

fn add_tech(form: &mut FormController) -> Result<(), PromptError> {
    let id = form.add_entry();
    prompt_entry(form, id)
}

fn remove_tech(form: &mut FormController) -> Result<(), PromptError> {
    let rows: Vec<(EntryId, String)> = form
        .state()
        .techs()
        .iter()
        .map(|row| (row.id, format!("{}  {} ({})", row.id, row.title, row.knowledge)))
        .collect();
    if rows.is_empty() {
        println!("No technologies to remove.");
        return Ok(());
    }

    let labels: Vec<String> = rows.iter().map(|(_, label)| label.clone()).collect();
    if let Some(index) = select("Remove which technology?", &labels)? {
        set_or_warn(form.remove_entry(rows[index].0));
    }
    Ok(())
}

fn set_or_warn(result: Result<(), FormError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "form update rejected");
    }
}
