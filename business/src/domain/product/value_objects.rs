use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ProductCategory {
    Vegetables,
    Fruits,
    Grains,
    Dairy,
    Other,
}

/// A customer review attached to a product. Seed data only; there is no
/// submission path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: String,
}
