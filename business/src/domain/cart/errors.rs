#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.exceeds_stock")]
    ExceedsStock { requested: u32, available: u32 },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
