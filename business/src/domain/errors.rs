/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.serialization")]
    Serialization,
    #[error("repository.database_error")]
    DatabaseError,
}

impl From<serde_json::Error> for RepositoryError {
    fn from(_: serde_json::Error) -> Self {
        RepositoryError::Serialization
    }
}
