#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Deliberately generic: a wrong role and an unknown email look the same.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.email_taken")]
    EmailTaken,
    #[error("auth.name_empty")]
    NameEmpty,
    #[error("auth.email_invalid")]
    EmailInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
