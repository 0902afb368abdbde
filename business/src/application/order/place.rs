use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let order = self
            .store
            .mutate(|state| state.place_order(&params.delivery_address))
            .await
            .inspect_err(|err| self.logger.warn(&format!("Order not placed: {}", err)))?;

        self.logger.info(&format!(
            "Order {} placed by {} for {:.2}",
            order.id, order.consumer_id, order.total_amount
        ));
        Ok(order)
    }
}
