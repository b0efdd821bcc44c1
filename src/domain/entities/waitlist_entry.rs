use chrono::{DateTime, Utc};
use serde::Serialize;

/// A prospective user who registered interest before launch.
///
/// `email` is stored lowercased and trimmed, and is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of an insert attempt against the waitlist store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistInsert {
    Inserted(WaitlistEntry),
    AlreadyListed,
}
