pub mod app_config;
pub mod checkout_config;
pub mod storage_config;
