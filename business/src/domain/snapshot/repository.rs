use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// The five persisted collections. Each is stored as one whole JSON snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Session,
    Users,
    Products,
    Orders,
    Cart,
}

impl SnapshotKey {
    /// Namespaced storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKey::Session => "gf_user",
            SnapshotKey::Users => "gf_users",
            SnapshotKey::Products => "gf_products",
            SnapshotKey::Orders => "gf_orders",
            SnapshotKey::Cart => "gf_cart",
        }
    }
}

impl std::fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key-value storage of collection snapshots. Adapters never own state;
/// they only keep the last payload written under each key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn read(&self, key: SnapshotKey) -> Result<Option<String>, RepositoryError>;
    async fn write(&self, key: SnapshotKey, payload: &str) -> Result<(), RepositoryError>;
}
