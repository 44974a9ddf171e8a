/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables, and establishing the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development where possible. `DATABASE_URL` is the one
 * required variable: the store is the source of truth and the server does
 * not run without it.
 *
 * # Startup Connectivity
 *
 * The pool connect retries with exponential backoff before giving up, so a
 * store that is still coming up (container orchestration, restarts) does
 * not kill the process on the first refused connection. Once the retry
 * budget is exhausted the error propagates and the process exits.
 */

use sqlx::PgPool;
use std::time::Duration;

use crate::backend::accrual::DEFAULT_ACCRUAL_INTERVAL_SECS;
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::DEFAULT_BROADCAST_CAPACITY;

/// Connection attempts before startup fails
const CONNECT_ATTEMPTS: u32 = 6;

/// Initial backoff between connection attempts; doubles per retry
const CONNECT_BACKOFF: Duration = Duration::from_secs(1);

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string (`DATABASE_URL`, required)
    pub database_url: String,
    /// HTTP listen port (`SERVER_PORT`, default 5500)
    pub port: u16,
    /// Accrual job period (`ACCRUAL_INTERVAL_SECS`, default 23 hours)
    pub accrual_interval: Duration,
    /// Per-viewer broadcast queue capacity (`BROADCAST_CAPACITY`, default 1000)
    pub broadcast_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, BackendError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| BackendError::config("DATABASE_URL is not set"))?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5500);

        let accrual_interval = std::env::var("ACCRUAL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_ACCRUAL_INTERVAL_SECS));

        let broadcast_capacity = std::env::var("BROADCAST_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_BROADCAST_CAPACITY);

        Ok(Self {
            database_url,
            port,
            accrual_interval,
            broadcast_capacity,
        })
    }
}

/// Establish the database connection pool, retrying with backoff
///
/// Attempts the connection up to [`CONNECT_ATTEMPTS`] times, doubling the
/// wait between attempts, then runs migrations. Change-feed-driven systems
/// should not die on a transient refusal, so only an exhausted retry
/// budget (or a migration failure) is fatal.
pub async fn connect_database(database_url: &str) -> Result<PgPool, BackendError> {
    let mut backoff = CONNECT_BACKOFF;
    let mut attempt = 0;

    let pool = loop {
        attempt += 1;
        tracing::info!(
            "Connecting to database (attempt {}/{})...",
            attempt,
            CONNECT_ATTEMPTS
        );

        match PgPool::connect(database_url).await {
            Ok(pool) => break pool,
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(
                    "Database connection failed: {:?}, retrying in {:?}",
                    e,
                    backoff
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => {
                tracing::error!(
                    "Database connection failed after {} attempts",
                    CONNECT_ATTEMPTS
                );
                return Err(BackendError::config(format!(
                    "Failed to connect to database: {}",
                    e
                )));
            }
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| BackendError::config(format!("Failed to run migrations: {}", e)))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_requires_database_url() {
        std::env::remove_var("DATABASE_URL");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(BackendError::ConfigError { .. })));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/pixelboard");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("ACCRUAL_INTERVAL_SECS");
        std::env::remove_var("BROADCAST_CAPACITY");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 5500);
        assert_eq!(
            config.accrual_interval,
            Duration::from_secs(DEFAULT_ACCRUAL_INTERVAL_SECS)
        );
        assert_eq!(config.broadcast_capacity, DEFAULT_BROADCAST_CAPACITY);

        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/pixelboard");
        std::env::set_var("SERVER_PORT", "8080");
        std::env::set_var("ACCRUAL_INTERVAL_SECS", "60");
        std::env::set_var("BROADCAST_CAPACITY", "32");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.accrual_interval, Duration::from_secs(60));
        assert_eq!(config.broadcast_capacity, 32);

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("ACCRUAL_INTERVAL_SECS");
        std::env::remove_var("BROADCAST_CAPACITY");
    }
}
