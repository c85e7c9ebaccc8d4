//! Stable identities for technology rows.
//!
//! Every row in the form gets an identity when it is created. The identity
//! never changes while the row lives, and it is independent of the row's
//! position, so removing one row does not disturb the others.
//! Identities render as `tech-{counter:03}` (e.g., "tech-001").

use std::fmt;

/// Identity of a single technology row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tech-{:03}", self.0)
    }
}

/// Monotonic generator of entry identities.
///
/// Identities are never reused, even after the form is reset.
#[derive(Debug, Clone, Default)]
pub struct EntryIdGen {
    issued: u64,
}

impl EntryIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh identity.
    pub fn fresh(&mut self) -> EntryId {
        self.issued += 1;
        EntryId(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let mut ids = EntryIdGen::new();
        let a = ids.fresh();
        let b = ids.fresh();
        let c = ids.fresh();
        assert_eq!(a.to_string(), "tech-001");
        assert_eq!(b.to_string(), "tech-002");
        assert_eq!(c.to_string(), "tech-003");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_entry_id_display() {
        let mut ids = EntryIdGen::new();
        assert_eq!(ids.fresh().to_string(), "tech-001");
        for _ in 0..40 {
            ids.fresh();
        }
        assert_eq!(ids.fresh().to_string(), "tech-042");
    }
}
