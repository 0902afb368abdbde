use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{User, UserRole};

pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<User, AuthError>;
}
