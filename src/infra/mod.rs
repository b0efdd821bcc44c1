use std::time::Duration;

use crate::{adapters::persistence::PostgresPersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(
    database_url: &str,
    acquire_timeout: Duration,
) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(database_url, acquire_timeout).await?;
    Ok(PostgresPersistence::new(pool))
}
