use std::sync::Arc;

use logger::TracingLogger;
use payment::simulated_gateway::SimulatedPaymentGateway;
use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use persistence::memory::InMemorySnapshotRepository;
use persistence::snapshot::repository::SnapshotRepositorySqlite;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::delivery::update_status::UpdateDeliveryStatusUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::product::browse::BrowseProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::store::{MarketStore, StoreOptions};
use business::domain::cart::use_cases::add::AddToCartUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::remove::RemoveFromCartUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateCartQuantityUseCase;
use business::domain::logger::Logger;
use business::domain::order::services::PaymentGateway;
use business::domain::order::use_cases::checkout::CheckoutUseCase;
use business::domain::order::use_cases::place::PlaceOrderUseCase;
use business::domain::order::use_cases::update_delivery_status::UpdateDeliveryStatusUseCase;
use business::domain::product::use_cases::browse::BrowseProductsUseCase;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::snapshot::repository::SnapshotRepository;
use business::domain::user::use_cases::login::LoginUseCase;
use business::domain::user::use_cases::logout::LogoutUseCase;
use business::domain::user::use_cases::register::RegisterUseCase;

use crate::config::app_config::AppConfig;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub store: Arc<MarketStore>,
    pub login: Arc<dyn LoginUseCase>,
    pub register: Arc<dyn RegisterUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub browse_products: Arc<dyn BrowseProductsUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub update_cart_quantity: Arc<dyn UpdateCartQuantityUseCase>,
    pub remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,
    pub checkout: Arc<dyn CheckoutUseCase>,
    pub update_delivery_status: Arc<dyn UpdateDeliveryStatusUseCase>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let snapshots: Arc<dyn SnapshotRepository> = match &config.storage {
            StorageConfig::Sqlite { url } => {
                let pool = create_sqlite_pool(&DatabaseConfig::new(url.clone())).await?;
                run_migrations(&pool).await?;
                Arc::new(SnapshotRepositorySqlite::new(pool))
            }
            StorageConfig::Memory => Arc::new(InMemorySnapshotRepository::new()),
        };
        let gateway = Arc::new(SimulatedPaymentGateway::new(
            config.checkout.delay,
            config.checkout.success_rate,
        ));

        Self::with_adapters(
            snapshots,
            gateway,
            StoreOptions {
                seed_demo_products: config.seed_demo_products,
            },
        )
        .await
    }

    pub async fn with_adapters(
        snapshots: Arc<dyn SnapshotRepository>,
        gateway: Arc<dyn PaymentGateway>,
        options: StoreOptions,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let store = Arc::new(MarketStore::open(snapshots, logger.clone(), options).await?);

        // Auth use cases
        let login = Arc::new(LoginUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let register = Arc::new(RegisterUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let browse_products = Arc::new(BrowseProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart = Arc::new(AddToCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity = Arc::new(UpdateCartQuantityUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart = Arc::new(RemoveFromCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let place_order: Arc<dyn PlaceOrderUseCase> = Arc::new(PlaceOrderUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let checkout = Arc::new(CheckoutUseCaseImpl {
            store: store.clone(),
            gateway,
            place_order,
            logger: logger.clone(),
        });
        let update_delivery_status = Arc::new(UpdateDeliveryStatusUseCaseImpl {
            store: store.clone(),
            logger,
        });

        Ok(Self {
            store,
            login,
            register,
            logout,
            create_product,
            browse_products,
            add_to_cart,
            update_cart_quantity,
            remove_from_cart,
            clear_cart,
            checkout,
            update_delivery_status,
        })
    }
}
