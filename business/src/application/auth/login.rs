use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, AuthError> {
        self.logger
            .info(&format!("Login attempt: {} as {}", params.email, params.role));

        let user = self
            .store
            .mutate(|state| state.login(&params.email, params.role))
            .await
            .inspect_err(|err| self.logger.warn(&format!("Login failed: {}", err)))?;

        self.logger.info(&format!("User signed in: {}", user.id));
        Ok(user)
    }
}
