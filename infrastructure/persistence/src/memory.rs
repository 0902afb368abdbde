use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::snapshot::repository::{SnapshotKey, SnapshotRepository};

/// Snapshot storage that forgets everything when the process exits.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshots: Mutex<HashMap<SnapshotKey, String>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn read(&self, key: SnapshotKey) -> Result<Option<String>, RepositoryError> {
        Ok(self.snapshots.lock().await.get(&key).cloned())
    }

    async fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), RepositoryError> {
        self.snapshots
            .lock()
            .await
            .insert(key, payload.to_string());
        Ok(())
    }
}
