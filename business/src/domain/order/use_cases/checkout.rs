use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct CheckoutParams {
    pub delivery_address: String,
}

/// Charge the payment gateway, then place the order from the cart.
#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError>;
}
