use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct PlaceOrderParams {
    pub delivery_address: String,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
}
