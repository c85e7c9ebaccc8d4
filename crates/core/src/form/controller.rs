//! Submit cycle and error bookkeeping on top of [`FormState`].

use super::errors::FormError;
use super::state::{EntryField, FieldValue, FormState};
use crate::ids::EntryId;
use crate::record::NormalizedRecord;
use crate::schema::{FieldErrors, FieldPath, SchemaRules, validate_record};

/// Where the controller is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Result of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    Invalid,
}

/// Receives the outcome of a submit.
///
/// `on_valid` is the completion callback; `on_invalid` renders per-field errors.
pub trait SubmitSink {
    fn on_valid(&mut self, record: &NormalizedRecord);

    fn on_invalid(&mut self, _errors: &FieldErrors) {}
}

/// Form state plus the submit state machine.
#[derive(Debug, Clone)]
pub struct FormController {
    rules: SchemaRules,
    state: FormState,
    initial_entries: usize,
    phase: Phase,
    errors: FieldErrors,
    submit_count: u32,
    last_outcome: Option<SubmitOutcome>,
}

impl FormController {
    /// Controller over an empty form with no technology rows.
    pub fn new(rules: SchemaRules) -> Self {
        Self::with_initial_entries(rules, 0)
    }

    /// Controller over an empty form that starts with `entries` blank rows.
    pub fn with_initial_entries(rules: SchemaRules, entries: usize) -> Self {
        Self {
            rules,
            state: FormState::with_entries(entries),
            initial_entries: entries,
            phase: Phase::Idle,
            errors: FieldErrors::new(),
            submit_count: 0,
            last_outcome: None,
        }
    }

    pub fn rules(&self) -> &SchemaRules {
        &self.rules
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Errors from the last failed submit, kept current by later edits.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }

    pub fn add_entry(&mut self) -> EntryId {
        let id = self.state.add_entry();
        tracing::debug!(%id, rows = self.state.techs().len(), "added technology row");
        self.revalidate_techs();
        id
    }

    pub fn remove_entry(&mut self, id: EntryId) -> Result<(), FormError> {
        self.state.remove_entry(id)?;
        tracing::debug!(%id, rows = self.state.techs().len(), "removed technology row");
        self.revalidate_techs();
        Ok(())
    }

    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), FormError> {
        self.state.set_field(path, value)?;
        self.revalidate(|p| p == path);
        Ok(())
    }

    pub fn set_entry_field(
        &mut self,
        id: EntryId,
        field: EntryField,
        value: FieldValue,
    ) -> Result<(), FormError> {
        self.state.set_entry_field(id, field, value)?;
        if let Some(pos) = self.state.position(id) {
            let path = FieldPath::tech(pos, field.as_str());
            self.revalidate(|p| *p == path);
        }
        Ok(())
    }

    /// Validate the current values and report the outcome to `sink`.
    ///
    /// On success the stored errors are cleared and `sink.on_valid` receives
    /// the normalized record. On failure the errors are stored by field path
    /// and passed to `sink.on_invalid`. Either way the controller ends idle.
    pub fn submit(&mut self, sink: &mut dyn SubmitSink) -> SubmitOutcome {
        self.phase = Phase::Submitting;
        self.submit_count += 1;
        tracing::debug!(attempt = self.submit_count, "submitting form");

        let outcome = match validate_record(&self.rules, &self.state.to_record()) {
            Ok(record) => {
                self.errors.clear();
                tracing::info!(techs = record.techs.len(), "registration accepted");
                sink.on_valid(&record);
                SubmitOutcome::Valid
            }
            Err(errors) => {
                self.errors = FieldErrors::from(&errors);
                tracing::info!(errors = self.errors.len(), "registration rejected");
                sink.on_invalid(&self.errors);
                SubmitOutcome::Invalid
            }
        };

        self.phase = Phase::Idle;
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Back to an empty form with the initial number of rows.
    pub fn reset(&mut self) {
        self.state.clear(self.initial_entries);
        self.errors.clear();
        self.submit_count = 0;
        self.last_outcome = None;
        self.phase = Phase::Idle;
    }

    fn revalidate_techs(&mut self) {
        let techs = FieldPath::key("techs");
        self.revalidate(|p| p.starts_with(&techs));
    }

    /// Refresh the stored errors for paths matching `pred`.
    ///
    /// Errors only show after a failed submit, so this does nothing until then.
    /// Other fields keep the message they already show.
    fn revalidate(&mut self, mut pred: impl FnMut(&FieldPath) -> bool) {
        if self.last_outcome != Some(SubmitOutcome::Invalid) {
            return;
        }

        let fresh = match validate_record(&self.rules, &self.state.to_record()) {
            Ok(_) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(&errors),
        };

        let mut refreshed = FieldErrors::new();
        for (path, message) in fresh.iter() {
            if pred(path) {
                refreshed.insert(path.clone(), message);
            } else if let Some(shown) = self.errors.get(path) {
                refreshed.insert(path.clone(), shown);
            }
        }
        for (path, shown) in self.errors.iter() {
            if !pred(path) && refreshed.get(path).is_none() {
                refreshed.insert(path.clone(), shown);
            }
        }
        self.errors = refreshed;
    }
}
