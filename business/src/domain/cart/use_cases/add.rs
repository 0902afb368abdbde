use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::ProductId;

pub struct AddToCartParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    /// Returns the resulting cart line.
    async fn execute(&self, params: AddToCartParams) -> Result<CartItem, CartError>;
}
