use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::use_cases::register::{RegisterParams, RegisterUseCase};

pub struct RegisterUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<User, AuthError> {
        self.logger.info(&format!(
            "Registering {} as {}",
            params.email, params.role
        ));

        let props = NewUserProps {
            name: params.name,
            email: params.email,
            role: params.role,
        };
        let user = self
            .store
            .mutate(move |state| state.register(props))
            .await
            .inspect_err(|err| self.logger.warn(&format!("Registration failed: {}", err)))?;

        self.logger.info(&format!("User registered with id: {}", user.id));
        Ok(user)
    }
}
