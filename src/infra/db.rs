use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, warn};

use super::InfraError;

/// Connections open on first use, so a store that is down at boot
/// surfaces per request instead of disabling persistence for good.
pub async fn init_db(database_url: &str, acquire_timeout: Duration) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => info!("Connected to database, migrations applied"),
        Err(e) => warn!(error = %e, "Migrations not applied, database may be unreachable"),
    }

    Ok(pool)
}
