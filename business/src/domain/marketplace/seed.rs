use chrono::NaiveDate;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductCategory, Review};
use crate::domain::shared::value_objects::{ProductId, UserId};

fn review(id: &str, user_name: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id: id.to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

/// Catalogue used on first run, before any product snapshot exists.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("p1"),
            farmer_id: UserId::new("f1"),
            farmer_name: "Green Valley Farm".to_string(),
            name: "Organic Tomatoes".to_string(),
            price: 40.0,
            quantity: 100,
            image_url: "https://picsum.photos/id/102/300/300".to_string(),
            description: "Fresh red tomatoes from the vine.".to_string(),
            category: ProductCategory::Vegetables,
            is_pre_order: false,
            available_date: None,
            rating: Some(4.5),
            reviews: vec![
                review("r1", "Alice", 5, "Super fresh and juicy!", "2024-10-10"),
                review("r2", "Bob", 4, "Good quality.", "2024-10-12"),
            ],
        },
        Product {
            id: ProductId::new("p2"),
            farmer_id: UserId::new("f1"),
            farmer_name: "Green Valley Farm".to_string(),
            name: "Fresh Potatoes".to_string(),
            price: 30.0,
            quantity: 500,
            image_url: "https://picsum.photos/id/113/300/300".to_string(),
            description: "Farm fresh potatoes, perfect for fries.".to_string(),
            category: ProductCategory::Vegetables,
            is_pre_order: false,
            available_date: None,
            rating: Some(4.2),
            reviews: vec![review("r3", "Charlie", 4, "Great for baking.", "2024-10-15")],
        },
        Product {
            id: ProductId::new("p3"),
            farmer_id: UserId::new("f2"),
            farmer_name: "Sunny Orchard".to_string(),
            name: "Sweet Strawberries".to_string(),
            price: 120.0,
            quantity: 50,
            image_url: "https://picsum.photos/id/1080/300/300".to_string(),
            description: "Juicy organic strawberries. Pre-order for next week!".to_string(),
            category: ProductCategory::Fruits,
            is_pre_order: true,
            available_date: NaiveDate::from_ymd_opt(2024, 12, 1),
            rating: Some(4.8),
            reviews: vec![
                review("r4", "Diana", 5, "Sweetest strawberries ever!", "2024-09-20"),
                review("r5", "Evan", 5, "Worth the wait.", "2024-09-22"),
            ],
        },
    ]
}
