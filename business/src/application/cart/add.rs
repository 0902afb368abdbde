use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartItem, CartError> {
        let line = self
            .store
            .mutate(|state| state.add_to_cart(&params.product_id, params.quantity))
            .await?;

        self.logger.info(&format!(
            "Cart now holds {} x {}",
            line.cart_quantity, line.product.name
        ));
        Ok(line)
    }
}
