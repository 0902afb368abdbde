use super::checkout_config::CheckoutConfig;
use super::storage_config::StorageConfig;

pub struct AppConfig {
    pub storage: StorageConfig,
    pub checkout: CheckoutConfig,
    pub seed_demo_products: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            checkout: CheckoutConfig::from_env(),
            seed_demo_products: true,
        }
    }
}
