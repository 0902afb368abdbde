use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<(), CartError> {
        self.logger.debug(&format!(
            "Setting cart quantity of {} to {}",
            params.product_id, params.quantity
        ));

        self.store
            .mutate(|state| state.update_cart_quantity(&params.product_id, params.quantity))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, state_with_session, store, user};

    #[tokio::test]
    async fn should_floor_quantity_at_one() {
        let mut state = state_with_session(user("c1", "Alice", UserRole::Consumer));
        state.add_to_cart(&ProductId::new("p1"), 3).unwrap();
        let store = store(state);

        UpdateCartQuantityUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        }
        .execute(UpdateCartQuantityParams {
            product_id: ProductId::new("p1"),
            quantity: -2,
        })
        .await
        .unwrap();

        let state = store.get().await;
        assert_eq!(state.cart.get(&ProductId::new("p1")).unwrap().cart_quantity, 1);
    }

    #[tokio::test]
    async fn should_ignore_absent_line() {
        let store = store(state_with_session(user("c1", "Alice", UserRole::Consumer)));
        let revisions = store.subscribe();

        UpdateCartQuantityUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        }
        .execute(UpdateCartQuantityParams {
            product_id: ProductId::new("p1"),
            quantity: 5,
        })
        .await
        .unwrap();

        assert!(store.get().await.cart.is_empty());
        assert_eq!(*revisions.borrow(), 0);
    }
}
