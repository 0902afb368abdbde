use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct SnapshotEntity {
    pub key: String,
    pub payload: String,
    pub updated_at: DateTime<Utc>,
}
