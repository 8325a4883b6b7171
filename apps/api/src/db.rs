use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Creates the connection pool for the candidate/job store. Pool size comes
/// from `DATABASE_MAX_CONNECTIONS`; a stuck acquire fails after a short
/// timeout instead of stalling a request.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!(
        "Connecting to the candidate store (pool size {})",
        config.db_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(&config.database_url)
        .await?;

    info!("Candidate store connection pool established");
    Ok(pool)
}
