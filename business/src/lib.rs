pub mod application {
    pub mod store;
    pub mod auth {
        pub mod login;
        pub mod logout;
        pub mod register;
    }
    pub mod product {
        pub mod browse;
        pub mod create;
    }
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod remove;
        pub mod update_quantity;
    }
    pub mod order {
        pub mod checkout;
        pub mod place;
    }
    pub mod delivery {
        pub mod update_status;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod navigation;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod snapshot {
        pub mod repository;
    }
    pub mod marketplace {
        pub mod seed;
        pub mod state;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod register;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
            pub mod create;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod remove;
            pub mod update_quantity;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod query;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod checkout;
            pub mod place;
            pub mod update_delivery_status;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::application::store::MarketStore;
    use crate::domain::logger::{Logger, MockLogger};
    use crate::domain::marketplace::seed::demo_products;
    use crate::domain::marketplace::state::MarketState;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::snapshot::repository::MockSnapshotRepository;
    use crate::domain::user::model::{User, UserRole};

    pub fn quiet_logger() -> Arc<dyn Logger> {
        let mut logger = MockLogger::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    pub fn user(id: &str, name: &str, role: UserRole) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            role,
        }
    }

    /// Demo catalogue, nobody signed in.
    pub fn seeded_state() -> MarketState {
        MarketState {
            products: demo_products(),
            ..MarketState::default()
        }
    }

    /// Demo catalogue with `signed_in` registered and holding the session.
    pub fn state_with_session(signed_in: User) -> MarketState {
        MarketState {
            users: vec![signed_in.clone()],
            session: Some(signed_in),
            ..seeded_state()
        }
    }

    /// Store whose storage accepts every write.
    pub fn store(state: MarketState) -> Arc<MarketStore> {
        let mut snapshots = MockSnapshotRepository::new();
        snapshots.expect_write().returning(|_, _| Ok(()));
        Arc::new(MarketStore::from_state(
            state,
            Arc::new(snapshots),
            quiet_logger(),
        ))
    }
}
