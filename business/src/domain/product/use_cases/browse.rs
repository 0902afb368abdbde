use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::{ProductFilter, ProductSort};

pub struct BrowseProductsParams {
    pub filter: ProductFilter,
    pub sort: ProductSort,
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, ProductError>;
}
