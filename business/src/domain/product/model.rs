use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::{ProductCategory, Review};
use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::user::model::User;

/// A listing owned by one farmer. The farmer's name is copied at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub farmer_id: UserId,
    pub farmer_name: String,
    pub name: String,
    pub price: f64,
    /// Units in stock.
    pub quantity: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub is_pre_order: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
    pub image_url: String,
    pub category: ProductCategory,
    pub is_pre_order: bool,
    pub available_date: Option<NaiveDate>,
}

impl Product {
    pub fn new(farmer: &User, props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        if props.is_pre_order && props.available_date.is_none() {
            return Err(ProductError::PreOrderDateMissing);
        }

        Ok(Self {
            id: ProductId::generate(),
            farmer_id: farmer.id.clone(),
            farmer_name: farmer.name.clone(),
            name: props.name.trim().to_string(),
            price: props.price,
            quantity: props.quantity,
            image_url: props.image_url,
            description: props.description,
            category: props.category,
            is_pre_order: props.is_pre_order,
            available_date: props.available_date.filter(|_| props.is_pre_order),
            rating: Some(0.0),
            reviews: Vec::new(),
        })
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// First `count` reviews, as shown in the product detail preview.
    pub fn top_reviews(&self, count: usize) -> &[Review] {
        &self.reviews[..self.reviews.len().min(count)]
    }
}
