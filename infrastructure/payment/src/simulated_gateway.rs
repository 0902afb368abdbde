use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use business::domain::order::errors::PaymentError;
use business::domain::order::services::PaymentGateway;

/// Stand-in for a card processor: waits a while, then approves a fixed
/// share of charges at random.
pub struct SimulatedPaymentGateway {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedPaymentGateway {
    /// `success_rate` is clamped to `0.0..=1.0`.
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_rate,
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn charge(&self, amount: f64) -> Result<(), PaymentError> {
        tracing::debug!("Processing simulated payment of {:.2}", amount);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if rand::rng().random_bool(self.success_rate) {
            tracing::info!("Simulated payment of {:.2} approved", amount);
            Ok(())
        } else {
            tracing::warn!("Simulated payment of {:.2} declined", amount);
            Err(PaymentError::Declined)
        }
    }
}
