#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.pre_order_date_missing")]
    PreOrderDateMissing,
    #[error("product.farmer_only")]
    FarmerOnly,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
