//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Config with no store and degraded mode enabled.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:4000".parse::<SocketAddr>().unwrap(),
        database_url: None,
        database_acquire_timeout_secs: 1,
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        static_dir: PathBuf::from("public"),
        degrade_on_outage: true,
        session_cookie_ttl_days: 7,
        log_file: "app.log".to_string(),
    }
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// Defaults to an empty `InMemoryWaitlistRepo` with degraded mode enabled.
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
    degrade_on_outage: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Some(Arc::new(InMemoryWaitlistRepo::new())),
            degrade_on_outage: true,
        }
    }

    pub fn with_waitlist_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Simulate a deployment without `DATABASE_URL`.
    pub fn without_store(mut self) -> Self {
        self.repo = None;
        self
    }

    pub fn with_degrade_on_outage(mut self, degrade: bool) -> Self {
        self.degrade_on_outage = degrade;
        self
    }

    pub fn build(self) -> AppState {
        let mut config = test_config();
        config.degrade_on_outage = self.degrade_on_outage;

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(self.repo, self.degrade_on_outage));

        AppState {
            config: Arc::new(config),
            waitlist_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
