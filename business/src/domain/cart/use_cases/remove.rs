use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveFromCartParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    /// `Ok(false)` when there was no such line.
    async fn execute(&self, params: RemoveFromCartParams) -> Result<bool, CartError>;
}
