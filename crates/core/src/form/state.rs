use std::str::FromStr;

use super::errors::FormError;
use crate::ids::{EntryId, EntryIdGen};
use crate::record::{FileRef, KnowledgeInput, Record, TechInput};
use crate::schema::{FieldPath, Segment};

/// A technology row as held by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct TechRow {
    pub id: EntryId,
    pub title: String,
    pub knowledge: KnowledgeInput,
}

/// Sub-field of a technology row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Title,
    Knowledge,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Knowledge => "knowledge",
        }
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "knowledge" => Ok(Self::Knowledge),
            _ => Err(format!("unknown entry field: {s}")),
        }
    }
}

/// A value coming from an input control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Files(Vec<FileRef>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<FileRef>> for FieldValue {
    fn from(files: Vec<FileRef>) -> Self {
        Self::Files(files)
    }
}

impl From<FileRef> for FieldValue {
    fn from(file: FileRef) -> Self {
        Self::Files(vec![file])
    }
}

/// Raw values of every input, plus the live list of technology rows.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub avatar: Vec<FileRef>,
    pub name: String,
    pub email: String,
    pub password: String,
    techs: Vec<TechRow>,
    ids: EntryIdGen,
}

impl FormState {
    /// Empty form with no technology rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form with `count` blank technology rows.
    pub fn with_entries(count: usize) -> Self {
        let mut state = Self::new();
        for _ in 0..count {
            state.add_entry();
        }
        state
    }

    pub fn techs(&self) -> &[TechRow] {
        &self.techs
    }

    pub fn entry(&self, id: EntryId) -> Option<&TechRow> {
        self.techs.iter().find(|row| row.id == id)
    }

    /// Current position of the row with this identity.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.techs.iter().position(|row| row.id == id)
    }

    /// Append a blank row (empty title, zero knowledge) and return its identity.
    pub fn add_entry(&mut self) -> EntryId {
        let id = self.ids.fresh();
        self.techs.push(TechRow { id, title: String::new(), knowledge: KnowledgeInput::Number(0.0) });
        id
    }

    /// Remove exactly the row with this identity.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<TechRow, FormError> {
        let pos = self.position(id).ok_or(FormError::UnknownEntry(id))?;
        Ok(self.techs.remove(pos))
    }

    /// Update a field addressed by path: `name`, `email`, `password`,
    /// `avatar`, `techs[i].title` or `techs[i].knowledge`.
    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), FormError> {
        match path.segments() {
            [Segment::Key(key)] => {
                let kind_err = |expected| FormError::ValueKind { path: path.clone(), expected };
                match key.as_str() {
                    "avatar" => match value {
                        FieldValue::Files(files) => self.avatar = files,
                        _ => return Err(kind_err("a file selection")),
                    },
                    "name" | "email" | "password" => {
                        let FieldValue::Text(text) = value else {
                            return Err(kind_err("text"));
                        };
                        match key.as_str() {
                            "name" => self.name = text,
                            "email" => self.email = text,
                            _ => self.password = text,
                        }
                    }
                    _ => return Err(FormError::UnknownField(path.clone())),
                }
                Ok(())
            }
            [Segment::Key(key), Segment::Index(index), Segment::Key(sub)] if key == "techs" => {
                let field: EntryField =
                    sub.parse().map_err(|_| FormError::UnknownField(path.clone()))?;
                let id = self.techs.get(*index).map(|row| row.id).ok_or(FormError::NoEntryAt(*index))?;
                self.set_entry_field(id, field, value)
            }
            _ => Err(FormError::UnknownField(path.clone())),
        }
    }

    /// Update a sub-field of the row with this identity.
    pub fn set_entry_field(
        &mut self,
        id: EntryId,
        field: EntryField,
        value: FieldValue,
    ) -> Result<(), FormError> {
        let pos = self.position(id).ok_or(FormError::UnknownEntry(id))?;
        let row = &mut self.techs[pos];
        match (field, value) {
            (EntryField::Title, FieldValue::Text(text)) => row.title = text,
            (EntryField::Knowledge, FieldValue::Text(text)) => row.knowledge = KnowledgeInput::Text(text),
            (EntryField::Knowledge, FieldValue::Number(n)) => row.knowledge = KnowledgeInput::Number(n),
            (field, _) => {
                return Err(FormError::ValueKind {
                    path: FieldPath::tech(pos, field.as_str()),
                    expected: if field == EntryField::Title { "text" } else { "text or a number" },
                });
            }
        }
        Ok(())
    }

    /// Clear every value. The identity generator keeps counting.
    pub fn clear(&mut self, entries: usize) {
        self.avatar.clear();
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.techs.clear();
        for _ in 0..entries {
            self.add_entry();
        }
    }

    /// Snapshot the current values as a candidate record.
    pub fn to_record(&self) -> Record {
        Record {
            avatar: self.avatar.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            techs: self
                .techs
                .iter()
                .map(|row| TechInput { title: row.title.clone(), knowledge: row.knowledge.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_blank() {
        let mut state = FormState::new();
        let id = state.add_entry();
        let row = state.entry(id).unwrap();
        assert!(row.title.is_empty());
        assert_eq!(row.knowledge, KnowledgeInput::Number(0.0));
    }

    #[test]
    fn test_remove_keeps_other_rows() {
        let mut state = FormState::with_entries(3);
        let ids: Vec<EntryId> = state.techs().iter().map(|r| r.id).collect();
        state.set_entry_field(ids[0], EntryField::Title, "go".into()).unwrap();
        state.set_entry_field(ids[2], EntryField::Title, "rust".into()).unwrap();

        let removed = state.remove_entry(ids[1]).unwrap();
        assert_eq!(removed.id, ids[1]);

        let left: Vec<(EntryId, &str)> =
            state.techs().iter().map(|r| (r.id, r.title.as_str())).collect();
        assert_eq!(left, vec![(ids[0], "go"), (ids[2], "rust")]);
        assert_eq!(state.position(ids[2]), Some(1));
    }

    #[test]
    fn test_remove_unknown_entry() {
        let mut state = FormState::with_entries(1);
        let id = state.techs()[0].id;
        state.remove_entry(id).unwrap();
        assert_eq!(state.remove_entry(id), Err(FormError::UnknownEntry(id)));
    }

    #[test]
    fn test_identities_not_reused_after_clear() {
        let mut state = FormState::with_entries(2);
        let before = state.techs()[1].id;
        state.clear(1);
        assert!(state.techs()[0].id > before);
    }

    #[test]
    fn test_set_scalar_fields_by_path() {
        let mut state = FormState::new();
        state.set_field(&FieldPath::key("name"), "jane".into()).unwrap();
        state.set_field(&FieldPath::key("email"), "j@x.com".into()).unwrap();
        state.set_field(&FieldPath::key("password"), "secret".into()).unwrap();
        state.set_field(&FieldPath::key("avatar"), FileRef::new("a.png", 1).into()).unwrap();

        assert_eq!(state.name, "jane");
        assert_eq!(state.email, "j@x.com");
        assert_eq!(state.password, "secret");
        assert_eq!(state.avatar.len(), 1);
    }

    #[test]
    fn test_set_entry_fields_by_path() {
        let mut state = FormState::with_entries(2);
        state.set_field(&FieldPath::tech(1, "title"), "rust".into()).unwrap();
        state.set_field(&FieldPath::tech(1, "knowledge"), "8".into()).unwrap();
        state.set_field(&FieldPath::tech(0, "knowledge"), 3.0.into()).unwrap();

        assert_eq!(state.techs()[1].title, "rust");
        assert_eq!(state.techs()[1].knowledge, KnowledgeInput::Text("8".to_string()));
        assert_eq!(state.techs()[0].knowledge, KnowledgeInput::Number(3.0));
    }

    #[test]
    fn test_set_field_errors() {
        let mut state = FormState::with_entries(1);

        let unknown = FieldPath::key("age");
        assert_eq!(state.set_field(&unknown, "3".into()), Err(FormError::UnknownField(unknown)));

        let bad_sub = FieldPath::tech(0, "level");
        assert_eq!(state.set_field(&bad_sub, "3".into()), Err(FormError::UnknownField(bad_sub)));

        assert_eq!(
            state.set_field(&FieldPath::tech(5, "title"), "x".into()),
            Err(FormError::NoEntryAt(5))
        );

        let err = state.set_field(&FieldPath::key("name"), vec![FileRef::new("a", 1)].into());
        assert!(matches!(err, Err(FormError::ValueKind { expected: "text", .. })));

        let err = state.set_field(&FieldPath::key("avatar"), "a.png".into());
        assert!(matches!(err, Err(FormError::ValueKind { .. })));

        let err = state.set_field(&FieldPath::tech(0, "title"), 1.0.into());
        assert!(matches!(err, Err(FormError::ValueKind { .. })));
    }

    #[test]
    fn test_to_record_keeps_row_order() {
        let mut state = FormState::with_entries(2);
        state.set_field(&FieldPath::tech(0, "title"), "go".into()).unwrap();
        state.set_field(&FieldPath::tech(1, "title"), "rust".into()).unwrap();

        let record = state.to_record();
        let titles: Vec<&str> = record.techs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["go", "rust"]);
    }
}
