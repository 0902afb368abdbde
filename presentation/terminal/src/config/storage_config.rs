use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://go-farm.db?mode=rwc";

/// Where snapshots are kept between runs.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    Sqlite { url: String },
    /// Nothing survives the process.
    Memory,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - GOFARM_DATABASE_URL: SQLite connection string (default: "sqlite://go-farm.db?mode=rwc")
    pub fn from_env() -> Self {
        let url = env::var("GOFARM_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self::Sqlite { url }
    }

    pub fn describe(&self) -> String {
        match self {
            StorageConfig::Sqlite { url } => format!("sqlite ({url})"),
            StorageConfig::Memory => "memory (nothing is saved)".to_string(),
        }
    }
}
