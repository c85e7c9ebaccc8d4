//! Application state and update logic following The Elm Architecture.

use std::path::Path;

use signup_core::config::types::{PreviewFormat, ResolvedConfig};
use signup_core::form::{EntryField, FieldValue, FormController, SubmitOutcome, SubmitSink};
use signup_core::ids::EntryId;
use signup_core::inspect::FileInspector;
use signup_core::record::{KnowledgeInput, NormalizedRecord};
use signup_core::schema::FieldPath;

use crate::cmd::output::render_preview;

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Avatar,
    Name,
    Email,
    Password,
    Title(EntryId),
    Knowledge(EntryId),
}

impl Focus {
    /// Path of the value this input edits, given the row's position.
    pub fn path(&self, position: Option<usize>) -> Option<FieldPath> {
        match self {
            Focus::Avatar => Some(FieldPath::key("avatar")),
            Focus::Name => Some(FieldPath::key("name")),
            Focus::Email => Some(FieldPath::key("email")),
            Focus::Password => Some(FieldPath::key("password")),
            Focus::Title(_) => position.map(|i| FieldPath::tech(i, "title")),
            Focus::Knowledge(_) => position.map(|i| FieldPath::tech(i, "knowledge")),
        }
    }

    fn entry(&self) -> Option<EntryId> {
        match self {
            Focus::Title(id) | Focus::Knowledge(id) => Some(*id),
            _ => None,
        }
    }
}

/// Feedback message to display in status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    FocusNext,
    FocusPrev,

    // Input handling
    InputChar(char),
    InputBackspace,

    // Form actions
    AddEntry,
    RemoveEntry,
    Submit,
    Reset,

    // System
    Quit,
    ClearStatus,
}

/// Keeps the rendered preview of the last accepted record.
struct PreviewSink {
    format: PreviewFormat,
    rendered: Option<String>,
}

impl SubmitSink for PreviewSink {
    fn on_valid(&mut self, record: &NormalizedRecord) {
        self.rendered = Some(render_preview(record, self.format));
    }
}

/// Main application state.
pub struct App {
    /// Resolved configuration.
    pub config: ResolvedConfig,

    /// The form being edited.
    pub form: FormController,

    /// Focused input.
    pub focus: Focus,

    /// Avatar path as typed. Attached when focus leaves the field.
    pub avatar_input: String,

    /// Rendered preview of the last accepted record.
    pub preview: Option<String>,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,

    inspector: Box<dyn FileInspector>,
}

impl App {
    pub fn new(config: ResolvedConfig, inspector: Box<dyn FileInspector>) -> Self {
        let form = FormController::with_initial_entries(config.schema.clone(), config.initial_techs);
        App {
            config,
            form,
            focus: Focus::Avatar,
            avatar_input: String::new(),
            preview: None,
            status: None,
            should_quit: false,
            inspector,
        }
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::FocusNext => self.move_focus(1),
            Message::FocusPrev => self.move_focus(-1),
            Message::InputChar(c) => self.edit(|text| text.push(c)),
            Message::InputBackspace => self.edit(|text| {
                text.pop();
            }),
            Message::AddEntry => {
                let id = self.form.add_entry();
                self.focus = Focus::Title(id);
            }
            Message::RemoveEntry => self.remove_focused_entry(),
            Message::Submit => self.submit(),
            Message::Reset => {
                self.form.reset();
                self.avatar_input.clear();
                self.preview = None;
                self.focus = Focus::Avatar;
                self.set_status("Form cleared", false);
            }
            Message::ClearStatus => {
                self.status = None;
            }
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Inputs in display order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Avatar, Focus::Name, Focus::Email, Focus::Password];
        for row in self.form.state().techs() {
            order.push(Focus::Title(row.id));
            order.push(Focus::Knowledge(row.id));
        }
        order
    }

    /// Text shown in the input for `focus`.
    pub fn input_text(&self, focus: Focus) -> String {
        let state = self.form.state();
        match focus {
            Focus::Avatar => self.avatar_input.clone(),
            Focus::Name => state.name.clone(),
            Focus::Email => state.email.clone(),
            Focus::Password => state.password.clone(),
            Focus::Title(id) => state.entry(id).map(|row| row.title.clone()).unwrap_or_default(),
            Focus::Knowledge(id) => state.entry(id).map(|row| knowledge_text(&row.knowledge)).unwrap_or_default(),
        }
    }

    /// Error currently shown under the input for `focus`.
    pub fn error_for(&self, focus: Focus) -> Option<&str> {
        let position = focus.entry().and_then(|id| self.form.state().position(id));
        let path = focus.path(position)?;
        self.form.error_for(&path)
    }

    fn move_focus(&mut self, step: isize) {
        if self.focus == Focus::Avatar {
            self.attach_avatar();
        }
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(order.len() as isize) as usize;
        self.focus = order[next];
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String)) {
        let mut text = self.input_text(self.focus);
        apply(&mut text);

        let result = match self.focus {
            Focus::Avatar => {
                self.avatar_input = text;
                Ok(())
            }
            Focus::Name => self.form.set_field(&FieldPath::key("name"), text.into()),
            Focus::Email => self.form.set_field(&FieldPath::key("email"), text.into()),
            Focus::Password => self.form.set_field(&FieldPath::key("password"), text.into()),
            Focus::Title(id) => self.form.set_entry_field(id, EntryField::Title, text.into()),
            Focus::Knowledge(id) => self.form.set_entry_field(id, EntryField::Knowledge, text.into()),
        };
        if let Err(e) = result {
            self.set_status(e.to_string(), true);
        }
    }

    /// Inspect the typed avatar path and attach the file, or clear the field.
    fn attach_avatar(&mut self) {
        let path = self.avatar_input.trim();
        let files = if path.is_empty() {
            Vec::new()
        } else {
            match self.inspector.inspect(Path::new(path)) {
                Ok(file) => vec![file],
                Err(e) => {
                    self.set_status(e.to_string(), true);
                    Vec::new()
                }
            }
        };
        if let Err(e) = self.form.set_field(&FieldPath::key("avatar"), FieldValue::Files(files)) {
            self.set_status(e.to_string(), true);
        }
    }

    fn remove_focused_entry(&mut self) {
        let Some(id) = self.focus.entry() else {
            self.set_status("Focus a technology row to remove it", true);
            return;
        };

        let order = self.focus_order();
        let index = order.iter().position(|f| *f == Focus::Title(id)).unwrap_or(0);
        match self.form.remove_entry(id) {
            Ok(()) => {
                let order = self.focus_order();
                self.focus = order[index.saturating_sub(1).min(order.len() - 1)];
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn submit(&mut self) {
        self.attach_avatar();

        let mut sink = PreviewSink { format: self.config.preview, rendered: None };
        match self.form.submit(&mut sink) {
            SubmitOutcome::Valid => {
                self.preview = sink.rendered;
                self.set_status("Registration accepted", false);
            }
            SubmitOutcome::Invalid => {
                self.preview = None;
                let count = self.form.errors().len();
                self.set_status(format!("{count} problem(s), fix the highlighted fields"), true);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage { text: text.into(), is_error });
    }
}

/// A fresh row holds numeric zero. Show it as an empty input.
fn knowledge_text(knowledge: &KnowledgeInput) -> String {
    match knowledge {
        KnowledgeInput::Number(n) if *n == 0.0 => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::inspect::InspectError;
    use signup_core::record::FileRef;

    struct FakeInspector;

    impl FileInspector for FakeInspector {
        fn inspect(&self, path: &Path) -> Result<FileRef, InspectError> {
            if path == Path::new("me.png") {
                Ok(FileRef::new("me.png", 2048).with_media_type("image/png"))
            } else {
                Err(InspectError::NotFound(path.to_path_buf()))
            }
        }
    }

    fn app() -> App {
        let mut config = ResolvedConfig::builtin();
        config.initial_techs = 1;
        App::new(config, Box::new(FakeInspector))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Message::InputChar(c));
        }
    }

    fn fill_valid(app: &mut App) {
        type_text(app, "me.png");
        app.update(Message::FocusNext);
        type_text(app, "jane doe");
        app.update(Message::FocusNext);
        type_text(app, "jane@x.com");
        app.update(Message::FocusNext);
        type_text(app, "secret1");
        app.update(Message::FocusNext);
        type_text(app, "go");
        app.update(Message::FocusNext);
        type_text(app, "5");
        app.update(Message::AddEntry);
        type_text(app, "rust");
        app.update(Message::FocusNext);
        type_text(app, "8");
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut app = app();
        let order = app.focus_order();
        assert_eq!(order.len(), 6);

        app.update(Message::FocusPrev);
        assert_eq!(app.focus, *order.last().unwrap());
        app.update(Message::FocusNext);
        assert_eq!(app.focus, Focus::Avatar);
    }

    #[test]
    fn test_fresh_knowledge_shows_empty() {
        let app = app();
        let id = app.form.state().techs()[0].id;
        assert_eq!(app.input_text(Focus::Knowledge(id)), "");
    }

    #[test]
    fn test_valid_submit_renders_preview() {
        let mut app = app();
        fill_valid(&mut app);
        app.update(Message::Submit);

        let preview = app.preview.as_deref().unwrap();
        assert!(preview.contains("Jane Doe"));
        assert!(!preview.contains("secret1"));
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_empty_submit_flags_fields() {
        let mut app = app();
        app.update(Message::Submit);

        assert!(app.preview.is_none());
        assert_eq!(app.error_for(Focus::Name), Some("name is required"));
        assert_eq!(app.error_for(Focus::Avatar), Some("avatar is required"));
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_unknown_avatar_path_reports_status() {
        let mut app = app();
        type_text(&mut app, "nope.png");
        app.update(Message::FocusNext);

        assert!(app.form.state().avatar.is_empty());
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_remove_entry_moves_focus_back() {
        let mut app = app();
        app.update(Message::AddEntry);
        let second = app.form.state().techs()[1].id;
        assert_eq!(app.focus, Focus::Title(second));

        app.update(Message::RemoveEntry);
        assert_eq!(app.form.state().techs().len(), 1);
        let first = app.form.state().techs()[0].id;
        assert_eq!(app.focus, Focus::Knowledge(first));
    }

    #[test]
    fn test_remove_without_row_focus_is_rejected() {
        let mut app = app();
        app.update(Message::RemoveEntry);
        assert_eq!(app.form.state().techs().len(), 1);
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = app();
        fill_valid(&mut app);
        app.update(Message::Submit);
        app.update(Message::Reset);

        assert!(app.preview.is_none());
        assert!(app.form.state().name.is_empty());
        assert_eq!(app.form.state().techs().len(), 1);
        assert_eq!(app.focus, Focus::Avatar);
    }
}
