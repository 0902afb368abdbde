use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::snapshot::repository::{SnapshotKey, SnapshotRepository};

use super::entity::SnapshotEntity;

pub struct SnapshotRepositorySqlite {
    pool: SqlitePool,
}

impl SnapshotRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotRepository for SnapshotRepositorySqlite {
    async fn read(&self, key: SnapshotKey) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, SnapshotEntity>(
            "SELECT key, payload, updated_at FROM snapshots WHERE key = ?1",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to read snapshot {}: {}", key, err);
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.payload))
    }

    async fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO snapshots (key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at"#,
        )
        .bind(key.as_str())
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to write snapshot {}: {}", key, err);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, run_migrations};

    async fn repository() -> SnapshotRepositorySqlite {
        let pool = create_sqlite_pool(&DatabaseConfig::new("sqlite::memory:".to_string()))
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        SnapshotRepositorySqlite::new(pool)
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let repository = repository().await;

        assert_eq!(repository.read(SnapshotKey::Orders).await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_keep_last_payload_per_key() {
        let repository = repository().await;

        repository.write(SnapshotKey::Cart, "[]").await.unwrap();
        repository
            .write(SnapshotKey::Cart, r#"[{"id":"p1","cartQuantity":2}]"#)
            .await
            .unwrap();
        repository.write(SnapshotKey::Session, "null").await.unwrap();

        assert_eq!(
            repository.read(SnapshotKey::Cart).await.unwrap().as_deref(),
            Some(r#"[{"id":"p1","cartQuantity":2}]"#)
        );
        assert_eq!(
            repository.read(SnapshotKey::Session).await.unwrap().as_deref(),
            Some("null")
        );
        assert_eq!(repository.read(SnapshotKey::Users).await.unwrap(), None);
    }
}
