use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
    domain::entities::waitlist_entry::{WaitlistEntry, WaitlistInsert},
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a normalised email. Uniqueness is enforced by the store.
    async fn insert(&self, email: &str, created_at: DateTime<Utc>) -> AppResult<WaitlistInsert>;
}

/// What happened to a waitlist submission that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Added(WaitlistEntry),
    AlreadyListed { email: String },
    /// Accepted without persisting: no store configured, or the store was unreachable.
    AcceptedUnpersisted { email: String },
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Option<Arc<dyn WaitlistRepo>>,
    degrade_on_outage: bool,
}

impl WaitlistUseCases {
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>, degrade_on_outage: bool) -> Self {
        Self {
            repo,
            degrade_on_outage,
        }
    }

    pub fn has_store(&self) -> bool {
        self.repo.is_some()
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, raw_email: &str) -> AppResult<SubmissionOutcome> {
        if !is_valid_email(raw_email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }
        let email = normalize_email(raw_email);

        let Some(repo) = &self.repo else {
            tracing::warn!(email = %email, "Waitlist store not configured, email received");
            return Ok(SubmissionOutcome::AcceptedUnpersisted { email });
        };

        match repo.insert(&email, Utc::now()).await {
            Ok(WaitlistInsert::Inserted(entry)) => {
                tracing::info!(email = %entry.email, "Added to waitlist");
                Ok(SubmissionOutcome::Added(entry))
            }
            Ok(WaitlistInsert::AlreadyListed) => {
                tracing::debug!(email = %email, "Email already on waitlist");
                Ok(SubmissionOutcome::AlreadyListed { email })
            }
            Err(AppError::StoreUnavailable(reason)) if self.degrade_on_outage => {
                tracing::warn!(
                    email = %email,
                    reason = %reason,
                    "Waitlist store unreachable, email received without persisting"
                );
                Ok(SubmissionOutcome::AcceptedUnpersisted { email })
            }
            Err(err) => Err(err),
        }
    }
}
