//! Text screens. Every view is a pure function of what it is shown, so
//! the shell can redraw at any time.

pub mod auth;
pub mod cart;
pub mod consumer;
pub mod delivery;
pub mod error_mapper;
pub mod farmer;
pub mod landing;
pub mod layout;

use business::domain::product::model::Product;

/// Rupee amount, with paise only when there are any.
pub fn money(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("₹{:.0}", rounded)
    } else {
        format!("₹{:.2}", rounded)
    }
}

/// Last four characters of an id, the way orders are labelled on screen.
pub fn short_id(id: &str) -> &str {
    let start = id
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(index, _)| index);
    &id[start..]
}

/// Unrated and freshly listed products both read "New".
pub fn rating(product: &Product) -> String {
    match product.rating {
        Some(rating) if rating > 0.0 => format!("{rating}"),
        _ => "New".to_string(),
    }
}

/// Pads to `width` characters, cutting long text with an ellipsis.
pub fn cell(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text}{}", " ".repeat(width - count))
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::marketplace::seed::demo_products;

    #[test]
    fn should_drop_zero_paise() {
        assert_eq!(money(40.0), "₹40");
        assert_eq!(money(40.5), "₹40.50");
        assert_eq!(money(0.1 + 0.2), "₹0.30");
    }

    #[test]
    fn should_keep_last_four_characters() {
        assert_eq!(short_id("8c1f5a2e-0000-4b1d-9a7e-1234abcd"), "abcd");
        assert_eq!(short_id("p1"), "p1");
    }

    #[test]
    fn should_call_unrated_products_new() {
        let mut product = demo_products().remove(0);
        assert_eq!(rating(&product), "4.5");

        product.rating = Some(0.0);
        assert_eq!(rating(&product), "New");

        product.rating = None;
        assert_eq!(rating(&product), "New");
    }

    #[test]
    fn should_pad_and_cut_cells() {
        assert_eq!(cell("abc", 5), "abc  ");
        assert_eq!(cell("abcdefgh", 5), "abcd…");
    }
}
