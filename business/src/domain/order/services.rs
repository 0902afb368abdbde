use async_trait::async_trait;

use super::errors::PaymentError;

/// Service port for charging the consumer at checkout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: f64) -> Result<(), PaymentError>;
}
