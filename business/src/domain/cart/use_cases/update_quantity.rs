use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateCartQuantityParams {
    pub product_id: ProductId,
    /// Values below 1 are floored to 1.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<(), CartError>;
}
