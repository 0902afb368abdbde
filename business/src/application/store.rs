use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{RwLock, watch};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::marketplace::seed::demo_products;
use crate::domain::marketplace::state::{MarketState, Mutation};
use crate::domain::snapshot::repository::{SnapshotKey, SnapshotRepository};
use crate::domain::user::model::User;

pub struct StoreOptions {
    /// Fill an empty catalogue with the demo products.
    pub seed_demo_products: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_demo_products: true,
        }
    }
}

/// Single owner of the marketplace state.
///
/// Mutations run against a copy of the state. The copy replaces the live
/// state only after every touched snapshot has been written, so readers
/// never see a change that storage refused. Each committed change bumps a
/// revision that views can watch.
pub struct MarketStore {
    state: RwLock<MarketState>,
    snapshots: Arc<dyn SnapshotRepository>,
    logger: Arc<dyn Logger>,
    revision: watch::Sender<u64>,
}

impl MarketStore {
    /// Restores every collection from storage. Missing or unreadable
    /// snapshots fall back to their defaults.
    pub async fn open(
        snapshots: Arc<dyn SnapshotRepository>,
        logger: Arc<dyn Logger>,
        options: StoreOptions,
    ) -> Result<Self, RepositoryError> {
        let session = load::<Option<User>>(snapshots.as_ref(), logger.as_ref(), SnapshotKey::Session)
            .await?
            .flatten();
        let users = load(snapshots.as_ref(), logger.as_ref(), SnapshotKey::Users)
            .await?
            .unwrap_or_default();
        let orders = load(snapshots.as_ref(), logger.as_ref(), SnapshotKey::Orders)
            .await?
            .unwrap_or_default();
        let cart = load(snapshots.as_ref(), logger.as_ref(), SnapshotKey::Cart)
            .await?
            .unwrap_or_default();
        let products = match load(snapshots.as_ref(), logger.as_ref(), SnapshotKey::Products).await? {
            Some(products) => products,
            None if options.seed_demo_products => {
                logger.info("No stored catalogue, seeding demo products");
                demo_products()
            }
            None => Vec::new(),
        };

        let state = MarketState {
            session,
            users,
            products,
            orders,
            cart,
        };
        logger.info(&format!(
            "Marketplace restored: {} users, {} products, {} orders",
            state.users.len(),
            state.products.len(),
            state.orders.len()
        ));

        Ok(Self::from_state(state, snapshots, logger))
    }

    pub fn from_state(
        state: MarketState,
        snapshots: Arc<dyn SnapshotRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: RwLock::new(state),
            snapshots,
            logger,
            revision,
        }
    }

    /// Copy of the current state.
    pub async fn get(&self) -> MarketState {
        self.state.read().await.clone()
    }

    /// Runs a read-only query against the current state.
    pub async fn read<R>(&self, query: impl FnOnce(&MarketState) -> R) -> R {
        query(&*self.state.read().await)
    }

    /// Receives the revision number after every committed change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub async fn mutate<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut MarketState) -> Result<Mutation<T>, E> + Send,
        E: From<RepositoryError> + Send,
        T: Send,
    {
        let mut live = self.state.write().await;
        let mut next = live.clone();
        let Mutation { value, touched } = operation(&mut next)?;

        for key in &touched {
            let payload = next.encode(*key).map_err(RepositoryError::from)?;
            if let Err(err) = self.snapshots.write(*key, &payload).await {
                self.logger
                    .error(&format!("Failed to persist snapshot {}: {}", key, err));
                return Err(err.into());
            }
            self.logger.debug(&format!("Persisted snapshot {}", key));
        }

        if !touched.is_empty() {
            *live = next;
            self.revision.send_modify(|revision| *revision += 1);
        }
        Ok(value)
    }
}

async fn load<T: DeserializeOwned>(
    snapshots: &dyn SnapshotRepository,
    logger: &dyn Logger,
    key: SnapshotKey,
) -> Result<Option<T>, RepositoryError> {
    let Some(payload) = snapshots.read(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            logger.warn(&format!(
                "Ignoring unreadable snapshot {}: {}",
                key, err
            ));
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::errors::CartError;
    use crate::domain::logger::MockLogger;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::snapshot::repository::MockSnapshotRepository;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, seeded_state};

    fn empty_storage() -> MockSnapshotRepository {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_read().returning(|_| Ok(None));
        snapshots
    }

    #[tokio::test]
    async fn should_seed_demo_products_when_catalogue_missing() {
        let store = MarketStore::open(
            Arc::new(empty_storage()),
            quiet_logger(),
            StoreOptions::default(),
        )
        .await
        .unwrap();

        let state = store.get().await;
        assert_eq!(state.products.len(), 3);
        assert!(state.session.is_none());
        assert!(state.cart.is_empty());
    }

    #[tokio::test]
    async fn should_start_empty_when_seeding_disabled() {
        let store = MarketStore::open(
            Arc::new(empty_storage()),
            quiet_logger(),
            StoreOptions {
                seed_demo_products: false,
            },
        )
        .await
        .unwrap();

        assert!(store.get().await.products.is_empty());
    }

    #[tokio::test]
    async fn should_restore_stored_snapshots() {
        let stored = seeded_state();
        let users = serde_json::to_string(&vec![User {
            id: "c1".into(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            role: UserRole::Consumer,
        }])
        .unwrap();
        let products = serde_json::to_string(&stored.products[..1]).unwrap();

        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_read().returning(move |key| match key {
            SnapshotKey::Users => Ok(Some(users.clone())),
            SnapshotKey::Products => Ok(Some(products.clone())),
            SnapshotKey::Session => Ok(Some("null".to_string())),
            _ => Ok(None),
        });

        let store = MarketStore::open(Arc::new(snapshots), quiet_logger(), StoreOptions::default())
            .await
            .unwrap();

        let state = store.get().await;
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].email, "a@x.com");
        assert_eq!(state.products.len(), 1);
        assert!(state.session.is_none());
    }

    #[tokio::test]
    async fn should_fall_back_to_default_on_corrupt_snapshot() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_read().returning(|key| match key {
            SnapshotKey::Orders => Ok(Some("{not json".to_string())),
            _ => Ok(None),
        });
        let mut logger = MockLogger::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("gf_orders"))
            .times(1)
            .returning(|_| ());

        let store = MarketStore::open(Arc::new(snapshots), Arc::new(logger), StoreOptions::default())
            .await
            .unwrap();

        assert!(store.get().await.orders.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_read_failure() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots
            .expect_read()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result =
            MarketStore::open(Arc::new(snapshots), quiet_logger(), StoreOptions::default()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[tokio::test]
    async fn should_persist_only_touched_snapshots() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots
            .expect_write()
            .withf(|key, payload| *key == SnapshotKey::Cart && payload.contains("\"cartQuantity\":2"))
            .times(1)
            .returning(|_, _| Ok(()));
        let store = MarketStore::from_state(seeded_state(), Arc::new(snapshots), quiet_logger());

        let line = store
            .mutate(|state| state.add_to_cart(&ProductId::new("p1"), 2))
            .await
            .unwrap();

        assert_eq!(line.cart_quantity, 2);
        assert_eq!(store.read(|state| state.cart.item_count()).await, 2);
    }

    #[tokio::test]
    async fn should_keep_state_when_persistence_fails() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots
            .expect_write()
            .returning(|_, _| Err(RepositoryError::Persistence));
        let store = MarketStore::from_state(seeded_state(), Arc::new(snapshots), quiet_logger());
        let revisions = store.subscribe();

        let result = store
            .mutate(|state| state.add_to_cart(&ProductId::new("p1"), 2))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::Persistence)
        ));
        assert!(store.get().await.cart.is_empty());
        assert_eq!(*revisions.borrow(), 0);
    }

    #[tokio::test]
    async fn should_write_nothing_when_operation_fails() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_write().never();
        let store = MarketStore::from_state(seeded_state(), Arc::new(snapshots), quiet_logger());

        let result = store
            .mutate(|state| state.add_to_cart(&ProductId::new("p1"), 0))
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_bump_revision_on_committed_change() {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_write().returning(|_, _| Ok(()));
        let store = MarketStore::from_state(seeded_state(), Arc::new(snapshots), quiet_logger());
        let mut revisions = store.subscribe();

        store
            .mutate(|state| Ok::<_, RepositoryError>(state.clear_cart()))
            .await
            .unwrap();

        assert!(revisions.has_changed().unwrap());
        assert_eq!(*revisions.borrow_and_update(), 1);
    }
}
