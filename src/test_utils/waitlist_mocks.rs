//! In-memory mock implementations for the waitlist store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEntry, WaitlistInsert},
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory implementation of WaitlistRepo with store-level email uniqueness.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored emails, sorted (for test assertions).
    pub fn emails(&self) -> Vec<String> {
        let mut emails: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        emails.sort();
        emails
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &str, created_at: DateTime<Utc>) -> AppResult<WaitlistInsert> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(email) {
            return Ok(WaitlistInsert::AlreadyListed);
        }
        let entry = WaitlistEntry {
            email: email.to_string(),
            created_at,
        };
        entries.insert(entry.email.clone(), entry.clone());
        Ok(WaitlistInsert::Inserted(entry))
    }
}

/// Store that cannot be reached (connection refused, pool timeout).
pub struct UnreachableWaitlistRepo;

#[async_trait]
impl WaitlistRepo for UnreachableWaitlistRepo {
    async fn insert(&self, _email: &str, _created_at: DateTime<Utc>) -> AppResult<WaitlistInsert> {
        Err(AppError::StoreUnavailable("connection refused".into()))
    }
}

/// Store that is reachable but rejects the write.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &str, _created_at: DateTime<Utc>) -> AppResult<WaitlistInsert> {
        Err(AppError::Database("Database operation failed".into()))
    }
}

/// Postgres `23505` as the driver reports it.
#[derive(Debug, thiserror::Error)]
#[error("duplicate key value violates unique constraint \"waitlist_pkey\"")]
pub struct UniqueViolation;

impl sqlx::error::DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint \"waitlist_pkey\""
    }

    fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
        Some("23505".into())
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
        sqlx::error::ErrorKind::UniqueViolation
    }
}
