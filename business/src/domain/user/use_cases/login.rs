use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{User, UserRole};

pub struct LoginParams {
    pub email: String,
    pub role: UserRole,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<User, AuthError>;
}
