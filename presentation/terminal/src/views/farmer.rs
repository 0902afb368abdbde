use business::domain::marketplace::state::MarketState;
use business::domain::order::query::{farmer_stats, for_farmer};
use business::domain::product::query::by_farmer;
use business::domain::user::model::User;

use super::{cell, money, rule, short_id};

pub fn render(farmer: &User, state: &MarketState) -> String {
    let stats = farmer_stats(&state.products, &state.orders, &farmer.id);
    let mut lines = vec![
        format!(
            "Total Products: {}   Orders Received: {}   Pending Delivery: {}",
            stats.products, stats.orders, stats.pending_orders
        ),
        String::new(),
        "My Products".to_string(),
        format!(
            "{} {} {} {} {}",
            cell("Product", 28),
            cell("Category", 11),
            cell("Price", 9),
            cell("Stock", 7),
            "Status"
        ),
        rule(70),
    ];

    let products = by_farmer(&state.products, &farmer.id);
    if products.is_empty() {
        lines.push("No products listed yet.".to_string());
    }
    for product in products {
        let name = match (product.is_pre_order, product.available_date) {
            (true, Some(date)) => format!("{} (pre-order {})", product.name, date),
            _ => product.name.clone(),
        };
        let status = if product.in_stock() {
            "In Stock"
        } else {
            "Out of Stock"
        };
        lines.push(format!(
            "{} {} {} {} {}",
            cell(&name, 28),
            cell(&product.category.to_string(), 11),
            cell(&money(product.price), 9),
            cell(&product.quantity.to_string(), 7),
            status
        ));
    }
    lines.push(
        "  add-product <name> --price <₹> --quantity <n> [--category <c>] [--description <text>] [--pre-order --available-date YYYY-MM-DD]"
            .to_string(),
    );

    lines.push(String::new());
    lines.push("Recent Orders".to_string());
    let orders = for_farmer(&state.orders, &farmer.id);
    if orders.is_empty() {
        lines.push("No orders yet.".to_string());
    }
    for farmer_order in orders {
        let order = farmer_order.order;
        lines.push(format!("Order #{}  {}", short_id(order.id.as_str()), order.status));
        lines.push(format!("  Customer: {}", order.consumer_name));
        for line in &farmer_order.lines {
            lines.push(format!(
                "  {} x {}  {}",
                line.product.name,
                line.cart_quantity,
                money(line.line_total())
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::Cart;
    use business::domain::marketplace::seed::demo_products;
    use business::domain::order::model::Order;
    use business::domain::shared::value_objects::UserId;
    use business::domain::user::model::UserRole;

    fn user(id: &str, name: &str, role: UserRole) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{id}@x.com"),
            role,
        }
    }

    #[test]
    fn should_show_only_own_products_and_order_lines() {
        let products = demo_products();
        let mut cart = Cart::default();
        cart.add(&products[0], 2);
        cart.add(&products[2], 1);
        let order = Order::from_cart(&user("c1", "Alice", UserRole::Consumer), &cart, "1 Road").unwrap();
        let state = MarketState {
            products,
            orders: vec![order],
            ..MarketState::default()
        };

        let screen = render(&user("f1", "Green Valley Farm", UserRole::Farmer), &state);

        assert!(screen.contains("Total Products: 2   Orders Received: 1   Pending Delivery: 1"));
        assert!(screen.contains("Organic Tomatoes"));
        assert!(screen.contains("Fresh Potatoes"));
        assert!(screen.contains("Customer: Alice"));
        assert!(screen.contains("Organic Tomatoes x 2  ₹80"));
        assert!(!screen.contains("Sweet Strawberries"));
    }

    #[test]
    fn should_say_when_nothing_listed() {
        let screen = render(&user("f9", "New Farm", UserRole::Farmer), &MarketState::default());

        assert!(screen.contains("No products listed yet."));
        assert!(screen.contains("No orders yet."));
    }
}
