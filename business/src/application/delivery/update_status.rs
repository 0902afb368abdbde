use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::update_delivery_status::{
    DeliveryAction, UpdateDeliveryStatusParams, UpdateDeliveryStatusUseCase,
};
use crate::domain::order::value_objects::DeliveryUpdate;
use crate::domain::user::model::UserRole;

pub struct UpdateDeliveryStatusUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateDeliveryStatusUseCase for UpdateDeliveryStatusUseCaseImpl {
    async fn execute(&self, params: UpdateDeliveryStatusParams) -> Result<Order, OrderError> {
        let order = self
            .store
            .mutate(|state| {
                let agent = state
                    .session_user()
                    .filter(|u| u.has_role(UserRole::Delivery))
                    .map(|u| u.id.clone())
                    .ok_or(OrderError::DeliveryOnly)?;

                let update = match params.action {
                    DeliveryAction::Accept { distance_km } => {
                        DeliveryUpdate::Accept { agent, distance_km }
                    }
                    DeliveryAction::Deliver => DeliveryUpdate::Deliver { agent },
                    DeliveryAction::Cancel => DeliveryUpdate::Cancel { agent },
                };
                state.update_delivery_status(&params.order_id, update)
            })
            .await
            .inspect_err(|err| {
                self.logger.warn(&format!(
                    "Delivery update on {} rejected: {}",
                    params.order_id, err
                ))
            })?;

        self.logger
            .info(&format!("Order {} is now {}", order.id, order.status));
        Ok(order)
    }
}
