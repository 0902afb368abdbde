use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::OrderId;

/// What the signed-in delivery agent wants to do with an order.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryAction {
    Accept { distance_km: f64 },
    Deliver,
    Cancel,
}

pub struct UpdateDeliveryStatusParams {
    pub order_id: OrderId,
    pub action: DeliveryAction,
}

#[async_trait]
pub trait UpdateDeliveryStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateDeliveryStatusParams) -> Result<Order, OrderError>;
}
