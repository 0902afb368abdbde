use business::domain::order::model::Order;
use business::domain::order::pricing::DELIVERY_RATE_PER_KM;
use business::domain::order::query::{active_for_agent, history_for_agent, pending};
use business::domain::user::model::User;

use super::{money, short_id};

pub fn render(agent: &User, orders: &[Order]) -> String {
    let pending = pending(orders);
    let active = active_for_agent(orders, &agent.id);
    let history = history_for_agent(orders, &agent.id);

    let mut lines = vec!["Delivery Dashboard".to_string(), String::new()];

    lines.push(format!("New Requests ({})", pending.len()));
    if pending.is_empty() {
        lines.push("No pending orders.".to_string());
    }
    for order in pending {
        lines.extend(card(order));
        lines.push(format!(
            "  accept {id} <km>   cancel {id}   * Rate: {rate}/km",
            id = short_id(order.id.as_str()),
            rate = money(DELIVERY_RATE_PER_KM)
        ));
    }

    lines.push(String::new());
    lines.push(format!("My Deliveries ({})", active.len()));
    if active.is_empty() {
        lines.push("No active deliveries.".to_string());
    }
    for order in active {
        lines.extend(card(order));
        lines.push(format!(
            "  Distance: {} km   Earnings: {}",
            order.distance_km.unwrap_or_default(),
            money(order.delivery_cost.unwrap_or_default())
        ));
        lines.push(format!(
            "  deliver {id}   cancel {id}",
            id = short_id(order.id.as_str())
        ));
    }

    lines.push(String::new());
    lines.push(format!("Completed ({})", history.len()));
    for order in history {
        lines.extend(card(order));
        lines.push(format!(
            "  ✓ Completed   Earned: {}",
            money(order.delivery_cost.unwrap_or_default())
        ));
    }

    lines.join("\n")
}

fn card(order: &Order) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Order #{}  {}  {}",
            short_id(order.id.as_str()),
            order.consumer_name,
            order.status
        ),
        format!("  ⌖ {}", order.delivery_address),
    ];
    for item in &order.items {
        lines.push(format!(
            "  {} x {}  From: {}",
            item.product.name, item.cart_quantity, item.product.farmer_name
        ));
    }
    lines
}
