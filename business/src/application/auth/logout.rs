use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), RepositoryError> {
        self.store
            .mutate(|state| Ok::<_, RepositoryError>(state.logout()))
            .await?;

        self.logger.info("User signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, state_with_session, store, user};

    #[tokio::test]
    async fn should_clear_session_and_cart() {
        let mut state = state_with_session(user("c1", "Alice", UserRole::Consumer));
        state.add_to_cart(&ProductId::new("p1"), 2).unwrap();
        let store = store(state);

        LogoutUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        }
        .execute()
        .await
        .unwrap();

        let state = store.get().await;
        assert!(state.session.is_none());
        assert!(state.cart.is_empty());
        assert_eq!(state.users.len(), 1);
    }
}
