use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// In-memory databases live and die with their connection.
    pub fn is_in_memory(&self) -> bool {
        self.connection_string.contains(":memory:") || self.connection_string.contains("mode=memory")
    }
}

/// Creates a SQLite connection pool, creating the database file if needed
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|err| {
            tracing::error!("Invalid database url: {}", err);
            DatabaseError::ConnectionError
        })?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout);
    pool_options = if config.is_in_memory() {
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(config.max_connections)
    };

    pool_options.connect_with(options).await.map_err(|err| {
        tracing::error!("Failed to connect to database: {}", err);
        DatabaseError::ConnectionError
    })
}

/// Runs the migrations embedded at compile time
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|err| {
            tracing::error!("Migration failed: {}", err);
            DatabaseError::MigrationError
        })
}
