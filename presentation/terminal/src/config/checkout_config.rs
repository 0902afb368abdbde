use std::env;
use std::time::Duration;

const DEFAULT_DELAY_MS: u64 = 1500;
const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Behaviour of the simulated payment step.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub delay: Duration,
    pub success_rate: f64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

impl CheckoutConfig {
    /// Load checkout configuration from environment variables
    ///
    /// Environment variables:
    /// - GOFARM_CHECKOUT_DELAY_MS: simulated payment latency (default: 1500)
    /// - GOFARM_PAYMENT_SUCCESS_RATE: share of approved payments, 0.0 to 1.0 (default: 0.9)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("GOFARM_CHECKOUT_DELAY_MS").ok().as_deref(),
            env::var("GOFARM_PAYMENT_SUCCESS_RATE").ok().as_deref(),
        )
    }

    /// Unparseable values fall back to the defaults.
    fn from_values(delay_ms: Option<&str>, success_rate: Option<&str>) -> Self {
        let defaults = Self::default();
        let delay = delay_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.delay);
        let success_rate = success_rate
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|rate| (0.0..=1.0).contains(rate))
            .unwrap_or(defaults.success_rate);

        Self {
            delay,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = CheckoutConfig::from_values(None, None);

        assert_eq!(config, CheckoutConfig::default());
        assert_eq!(config.delay, Duration::from_millis(1500));
        assert_eq!(config.success_rate, 0.9);
    }

    #[test]
    fn should_read_valid_values() {
        let config = CheckoutConfig::from_values(Some("0"), Some("1"));

        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.success_rate, 1.0);
    }

    #[test]
    fn should_ignore_invalid_values() {
        let config = CheckoutConfig::from_values(Some("soon"), Some("1.5"));

        assert_eq!(config, CheckoutConfig::default());
    }
}
