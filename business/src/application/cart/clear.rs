use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<(), CartError> {
        self.store
            .mutate(|state| Ok::<_, RepositoryError>(state.clear_cart()))
            .await?;

        self.logger.info("Cart cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, state_with_session, store, user};

    #[tokio::test]
    async fn should_empty_cart() {
        let mut state = state_with_session(user("c1", "Alice", UserRole::Consumer));
        state.add_to_cart(&ProductId::new("p1"), 2).unwrap();
        let store = store(state);

        ClearCartUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        }
        .execute()
        .await
        .unwrap();

        assert!(store.get().await.cart.is_empty());
    }
}
