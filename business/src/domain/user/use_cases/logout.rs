use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), RepositoryError>;
}
