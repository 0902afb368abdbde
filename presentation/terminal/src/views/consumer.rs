use business::domain::product::model::Product;
use business::domain::product::query::{DEFAULT_MAX_PRICE, ProductFilter, ProductSort};
use business::domain::shared::value_objects::ProductId;

use super::{money, rating};

/// What the catalogue screen is currently showing.
#[derive(Debug, Clone, Default)]
pub struct CatalogueView {
    pub filter: ProductFilter,
    pub sort: ProductSort,
    /// Product whose details are open.
    pub selected: Option<ProductId>,
}

impl CatalogueView {
    pub fn clear_filters(&mut self) {
        self.filter = ProductFilter::default();
    }
}

/// `products` are already filtered and sorted. `selected` is the product
/// behind `view.selected`, looked up fresh so stock is current.
pub fn render(view: &CatalogueView, products: &[Product], selected: Option<&Product>) -> String {
    let mut lines = vec![
        "Fresh from the Farm".to_string(),
        "Directly from farmers to your table".to_string(),
        String::new(),
        filter_bar(view),
        String::new(),
    ];

    for product in products {
        lines.extend(card(product));
        lines.push(String::new());
    }

    if products.is_empty() {
        lines.push("No products found matching your filters.".to_string());
        if !view.filter.is_default() {
            lines.push("  clear-filters".to_string());
        }
    }

    if let Some(product) = selected {
        lines.push(String::new());
        lines.extend(details(product));
    }

    lines.join("\n")
}

fn filter_bar(view: &CatalogueView) -> String {
    let search = if view.filter.search.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", view.filter.search)
    };
    let category = view
        .filter
        .category
        .map_or("All".to_string(), |c| c.to_string());
    let max_price = if view.filter.max_price >= DEFAULT_MAX_PRICE {
        money(DEFAULT_MAX_PRICE)
    } else {
        money(view.filter.max_price)
    };
    format!(
        "Search: {search}   Category: {category}   Max Price: {max_price}   Sort: {}",
        view.sort
    )
}

fn card(product: &Product) -> Vec<String> {
    let stock = if product.in_stock() {
        format!("{} left", product.quantity)
    } else {
        "Sold Out".to_string()
    };
    let mut tags = vec![product.category.to_string(), stock];
    if product.is_pre_order {
        tags.push("Pre-Order".to_string());
    }

    let mut lines = vec![
        format!("[{}] {}  {}", product.id, product.name, money(product.price)),
        format!(
            "  {}  ★ {} ({})  {}",
            product.farmer_name,
            rating(product),
            product.reviews.len(),
            tags.join(" · ")
        ),
    ];
    if !product.description.is_empty() {
        lines.push(format!("  {}", product.description));
    }
    if let (true, Some(date)) = (product.is_pre_order, product.available_date) {
        lines.push(format!("  Available on: {date}"));
    }
    lines
}

fn details(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!("┌ {} ({})", product.name, product.category),
        format!(
            "│ ★ {} ({} reviews)",
            rating(product),
            product.reviews.len()
        ),
    ];
    if !product.description.is_empty() {
        lines.push(format!("│ {}", product.description));
    }
    lines.push("│ Farmer Details".to_string());
    lines.push(format!("│   Listed by {}", product.farmer_name));
    lines.push("│   Verified Organic Producer".to_string());

    let reviews = product.top_reviews(2);
    if !reviews.is_empty() {
        lines.push("│ Recent Reviews".to_string());
        for review in reviews {
            lines.push(format!(
                "│   {} {}",
                review.user_name,
                "★".repeat(review.rating.into())
            ));
            lines.push(format!("│   \"{}\"", review.comment));
        }
    }

    let action = match (product.in_stock(), product.is_pre_order) {
        (false, _) => "Out of Stock".to_string(),
        (true, true) => "Pre-Order Now: add".to_string(),
        (true, false) => "Add to Cart: add".to_string(),
    };
    lines.push(format!("│ Price per unit {}", money(product.price)));
    lines.push(format!("└ {action}   close"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::marketplace::seed::demo_products;

    #[test]
    fn should_list_cards_with_stock_and_rating() {
        let screen = render(&CatalogueView::default(), &demo_products(), None);

        assert!(screen.contains("[p1] Organic Tomatoes  ₹40"));
        assert!(screen.contains("★ 4.5 (2)"));
        assert!(screen.contains("100 left"));
        assert!(screen.contains("Pre-Order"));
        assert!(screen.contains("Available on: 2024-12-01"));
        assert!(screen.contains("Category: All"));
    }

    #[test]
    fn should_offer_clear_filters_when_nothing_matches() {
        let screen = render(&CatalogueView::default(), &[], None);

        assert!(screen.contains("No products found matching your filters."));
        assert!(!screen.contains("clear-filters"));

        let mut view = CatalogueView::default();
        view.filter.search = "kale".to_string();
        let screen = render(&view, &[], None);
        assert!(screen.contains("  clear-filters"));
    }

    #[test]
    fn should_show_two_reviews_in_details() {
        let products = demo_products();
        let view = CatalogueView {
            selected: Some(products[0].id.clone()),
            ..CatalogueView::default()
        };

        let screen = render(&view, &products, Some(&products[0]));

        assert!(screen.contains("Recent Reviews"));
        assert!(screen.contains("Listed by Green Valley Farm"));
        assert!(screen.contains("Add to Cart: add"));
    }

    #[test]
    fn should_mark_sold_out_products() {
        let mut product = demo_products().remove(1);
        product.quantity = 0;
        let view = CatalogueView {
            selected: Some(product.id.clone()),
            ..CatalogueView::default()
        };

        let screen = render(&view, std::slice::from_ref(&product), Some(&product));

        assert!(screen.contains("Sold Out"));
        assert!(screen.contains("Out of Stock"));
    }
}
