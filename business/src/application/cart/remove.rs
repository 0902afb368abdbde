use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<bool, CartError> {
        let removed = self
            .store
            .mutate(|state| Ok::<_, RepositoryError>(state.remove_from_cart(&params.product_id)))
            .await?;

        if removed {
            self.logger
                .info(&format!("Removed {} from cart", params.product_id));
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, state_with_session, store, user};

    #[tokio::test]
    async fn should_remove_only_matching_line() {
        let mut state = state_with_session(user("c1", "Alice", UserRole::Consumer));
        state.add_to_cart(&ProductId::new("p1"), 1).unwrap();
        state.add_to_cart(&ProductId::new("p2"), 1).unwrap();
        let store = store(state);
        let use_case = RemoveFromCartUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        };

        let removed = use_case
            .execute(RemoveFromCartParams {
                product_id: ProductId::new("p1"),
            })
            .await
            .unwrap();
        let again = use_case
            .execute(RemoveFromCartParams {
                product_id: ProductId::new("p1"),
            })
            .await
            .unwrap();

        assert!(removed);
        assert!(!again);
        let cart = store.get().await.cart;
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("p2")).is_some());
    }
}
