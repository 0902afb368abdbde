use business::domain::marketplace::state::MarketState;
use business::domain::order::model::Order;
use business::domain::order::query::for_consumer;
use business::domain::user::model::User;

use super::{money, short_id};

pub const PROCESSING: &str = "Processing payment...";

/// The cart screen. After a successful checkout it shows the confirmation
/// for `placed` instead.
pub fn render(consumer: &User, state: &MarketState, placed: Option<&Order>) -> String {
    if let Some(order) = placed {
        return success(order);
    }
    if state.cart.is_empty() {
        return empty(consumer, state);
    }

    let cart = &state.cart;
    let mut lines = vec![
        "← Back to Shop: goto /consumer".to_string(),
        format!("Shopping Cart ({} items)", cart.len()),
        String::new(),
    ];
    for item in cart.items() {
        let stock = state
            .product(item.product_id())
            .map_or(item.product.quantity, |p| p.quantity);
        lines.push(format!("[{}] {}", item.product_id(), item.product.name));
        lines.push(format!(
            "  {}  qty {}  Available: {}  {}",
            item.product.farmer_name,
            item.cart_quantity,
            stock,
            money(item.line_total())
        ));
    }

    let total = cart.total();
    lines.extend([
        String::new(),
        "Order Summary".to_string(),
        format!("  Subtotal          {}", money(total)),
        "  Delivery Charges  Calculated later".to_string(),
        format!("  Total to Pay      {}", money(total)),
        String::new(),
        "  qty <id> <n>   remove <id>   clear-cart".to_string(),
        "  checkout <delivery address>".to_string(),
    ]);
    lines.join("\n")
}

fn success(order: &Order) -> String {
    [
        "Order Placed Successfully!".to_string(),
        format!(
            "Order #{}  {}",
            short_id(order.id.as_str()),
            money(order.total_amount)
        ),
        "Your fresh products will be on their way soon.".to_string(),
        "  Continue Shopping: goto /consumer".to_string(),
    ]
    .join("\n")
}

fn empty(consumer: &User, state: &MarketState) -> String {
    let mut lines = vec![
        "← Back to Shop: goto /consumer".to_string(),
        "Your Cart is Empty".to_string(),
        "Looks like you haven't added any fresh produce yet.".to_string(),
        "  Browse Products: goto /consumer".to_string(),
    ];

    let history = for_consumer(&state.orders, &consumer.id);
    if !history.is_empty() {
        lines.push(String::new());
        lines.push("Your Recent Orders".to_string());
        for order in history {
            lines.push(format!(
                "  Order #{}  {} items • {}  {}",
                short_id(order.id.as_str()),
                order.items.len(),
                order.status,
                money(order.total_amount + order.delivery_cost.unwrap_or_default())
            ));
        }
    }
    lines.join("\n")
}
