use business::domain::cart::model::Cart;
use business::domain::user::model::{User, UserRole};

use super::rule;

pub const WIDTH: usize = 72;

/// Brand bar plus who is signed in. Consumers also see their cart badge.
pub fn header(session: Option<&User>, cart: &Cart) -> String {
    let right = match session {
        Some(user) => {
            let mut parts = vec![format!("{} ({})", user.name, user.role)];
            if user.has_role(UserRole::Consumer) {
                let badge = if cart.is_empty() {
                    "[cart]".to_string()
                } else {
                    format!("[cart: {}]", cart.item_count())
                };
                parts.push(badge);
            }
            parts.push("logout".to_string());
            parts.join("  ")
        }
        None => "login  register".to_string(),
    };

    let brand = "GO FARM";
    let gap = WIDTH.saturating_sub(brand.len() + right.chars().count()).max(2);
    [rule(WIDTH), format!("{brand}{}{right}", " ".repeat(gap)), rule(WIDTH)].join("\n")
}

pub fn footer() -> String {
    [
        rule(WIDTH),
        "© 2024 GO FARM. Connecting nature to your doorstep.".to_string(),
    ]
    .join("\n")
}

/// One-line message shown above the screen after a command.
pub fn notice(message: &str) -> String {
    format!("» {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::marketplace::seed::demo_products;
    use business::domain::shared::value_objects::UserId;

    fn user(role: UserRole) -> User {
        User {
            id: UserId::new("u1"),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            role,
        }
    }

    #[test]
    fn should_offer_login_when_signed_out() {
        let header = header(None, &Cart::default());

        assert!(header.contains("GO FARM"));
        assert!(header.contains("login  register"));
    }

    #[test]
    fn should_show_cart_badge_for_consumers_only() {
        let mut cart = Cart::default();
        let products = demo_products();
        cart.add(&products[0], 2);
        cart.add(&products[1], 1);

        let consumer = header(Some(&user(UserRole::Consumer)), &cart);
        assert!(consumer.contains("Alice (CONSUMER)"));
        assert!(consumer.contains("[cart: 3]"));

        let farmer = header(Some(&user(UserRole::Farmer)), &cart);
        assert!(!farmer.contains("[cart"));
    }

    #[test]
    fn should_render_badge_for_huge_cart() {
        let mut cart = Cart::default();
        let products = demo_products();
        cart.add(&products[0], u32::MAX);
        cart.add(&products[1], u32::MAX);

        let consumer = header(Some(&user(UserRole::Consumer)), &cart);

        assert!(consumer.contains("[cart: 8589934590]"));
    }
}
