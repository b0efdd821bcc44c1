use crate::{
    adapters::http::app_state::AppState,
    infra::{InfraError, config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use secrecy::ExposeSecret;
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    init_tracing(&config.log_file);

    Ok(app_state_from_config(config).await?)
}

pub async fn app_state_from_config(config: AppConfig) -> Result<AppState, InfraError> {
    let waitlist_repo = waitlist_repo(&config).await?;
    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo, config.degrade_on_outage);

    tracing::info!(
        persisted = waitlist_use_cases.has_store(),
        degrade_on_outage = config.degrade_on_outage,
        "Waitlist intake ready"
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

/// `None` only when no store is configured; outages are handled per request.
async fn waitlist_repo(config: &AppConfig) -> Result<Option<Arc<dyn WaitlistRepo>>, InfraError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, waitlist submissions will not be persisted");
        return Ok(None);
    };

    let persistence = postgres_persistence(
        database_url.expose_secret(),
        Duration::from_secs(config.database_acquire_timeout_secs),
    )
    .await?;
    Ok(Some(Arc::new(persistence) as Arc<dyn WaitlistRepo>))
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs); skipped if the file can't be created.
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
