use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::services::PaymentGateway;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct CheckoutUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub place_order: Arc<dyn PlaceOrderUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError> {
        // Nothing is charged for a cart that could not become an order.
        let amount = self
            .store
            .read(|state| state.checkout_total(&params.delivery_address))
            .await?;

        self.logger
            .info(&format!("Charging {:.2} at checkout", amount));
        if let Err(err) = self.gateway.charge(amount).await {
            self.logger.warn(&format!("Payment failed: {}", err));
            return Err(OrderError::PaymentDeclined);
        }

        self.place_order
            .execute(PlaceOrderParams {
                delivery_address: params.delivery_address,
            })
            .await
    }
}
