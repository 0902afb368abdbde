//! Catalogue queries. Pure functions over the product collection,
//! recomputed on every render.

use strum_macros::{Display, EnumString};

use super::model::Product;
use super::value_objects::ProductCategory;
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub search: String,
    /// `None` means all categories.
    pub category: Option<ProductCategory>,
    pub max_price: f64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty() || product.name.to_lowercase().contains(&search);
        let matches_category = self.category.is_none_or(|c| product.category == c);
        matches_search && matches_category && product.price <= self.max_price
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ProductSort {
    /// Listing order.
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    Name,
}

pub fn browse(products: &[Product], filter: &ProductFilter, sort: ProductSort) -> Vec<Product> {
    let mut matching: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        ProductSort::Newest => {}
        ProductSort::PriceLowToHigh => matching.sort_by(|a, b| a.price.total_cmp(&b.price)),
        ProductSort::PriceHighToLow => matching.sort_by(|a, b| b.price.total_cmp(&a.price)),
        ProductSort::Rating => matching.sort_by(|a, b| {
            b.rating
                .unwrap_or_default()
                .total_cmp(&a.rating.unwrap_or_default())
        }),
        ProductSort::Name => matching.sort_by_key(|p| p.name.to_lowercase()),
    }

    matching
}

pub fn by_farmer<'a>(products: &'a [Product], farmer_id: &UserId) -> Vec<&'a Product> {
    products.iter().filter(|p| &p.farmer_id == farmer_id).collect()
}
