use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCategory;

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub image_url: String,
    pub category: ProductCategory,
    pub is_pre_order: bool,
    pub available_date: Option<NaiveDate>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
