//! Form state and the submit state machine.
//!
//! [`FormState`] holds raw input, including the technology rows with their
//! stable identities. [`FormController`] wraps it with the submit cycle
//! (`idle → submitting → valid | invalid → idle`), keeps per-field error
//! messages, and reports outcomes to a [`SubmitSink`].

pub mod controller;
pub mod errors;
pub mod state;

pub use controller::{FormController, Phase, SubmitOutcome, SubmitSink};
pub use errors::FormError;
pub use state::{EntryField, FieldValue, FormState, TechRow};
