//! Per-role slices of the order collection.

use super::model::Order;
use super::value_objects::OrderStatus;
use crate::domain::cart::model::CartItem;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Orders waiting for any delivery agent.
pub fn pending(orders: &[Order]) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .collect()
}

/// Orders the agent has taken and not yet closed.
pub fn active_for_agent<'a>(orders: &'a [Order], agent: &UserId) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| o.is_assigned_to(agent) && !o.status.is_final())
        .collect()
}

pub fn history_for_agent<'a>(orders: &'a [Order], agent: &UserId) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| o.is_assigned_to(agent) && o.status == OrderStatus::Delivered)
        .collect()
}

pub fn for_consumer<'a>(orders: &'a [Order], consumer: &UserId) -> Vec<&'a Order> {
    orders.iter().filter(|o| &o.consumer_id == consumer).collect()
}

/// An order as seen by one farmer: only their own lines.
#[derive(Debug)]
pub struct FarmerOrder<'a> {
    pub order: &'a Order,
    pub lines: Vec<&'a CartItem>,
}

impl FarmerOrder<'_> {
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total()).sum()
    }
}

pub fn for_farmer<'a>(orders: &'a [Order], farmer: &'a UserId) -> Vec<FarmerOrder<'a>> {
    orders
        .iter()
        .filter_map(|order| {
            let lines: Vec<&CartItem> = order.items_from_farmer(farmer).collect();
            (!lines.is_empty()).then_some(FarmerOrder { order, lines })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmerStats {
    pub products: usize,
    pub orders: usize,
    pub pending_orders: usize,
}

pub fn farmer_stats(products: &[Product], orders: &[Order], farmer: &UserId) -> FarmerStats {
    let farmer_orders = for_farmer(orders, farmer);
    FarmerStats {
        products: products.iter().filter(|p| &p.farmer_id == farmer).count(),
        orders: farmer_orders.len(),
        pending_orders: farmer_orders
            .iter()
            .filter(|fo| fo.order.status == OrderStatus::Pending)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::marketplace::seed::demo_products;
    use crate::domain::order::value_objects::DeliveryUpdate;
    use crate::domain::user::model::{NewUserProps, User, UserRole};

    fn consumer(name: &str) -> User {
        User::new(NewUserProps {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            role: UserRole::Consumer,
        })
        .unwrap()
    }

    fn order_of(consumer: &User, product_index: usize) -> Order {
        let mut cart = Cart::default();
        cart.add(&demo_products()[product_index], 1);
        Order::from_cart(consumer, &cart, "1 Farm Road").unwrap()
    }

    /// Three orders: one pending, one accepted by d1, one delivered by d1.
    fn fixture() -> (Vec<Order>, User) {
        let alice = consumer("Alice");
        let bob = consumer("Bob");
        let d1 = UserId::new("d1");

        let pending_order = order_of(&alice, 0);
        let mut accepted = order_of(&bob, 2);
        accepted
            .apply(DeliveryUpdate::Accept {
                agent: d1.clone(),
                distance_km: 2.0,
            })
            .unwrap();
        let mut delivered = order_of(&alice, 1);
        delivered
            .apply(DeliveryUpdate::Accept {
                agent: d1.clone(),
                distance_km: 4.0,
            })
            .unwrap();
        delivered.apply(DeliveryUpdate::Deliver { agent: d1 }).unwrap();

        (vec![pending_order, accepted, delivered], alice)
    }

    #[test]
    fn should_split_delivery_queues() {
        let (orders, _) = fixture();
        let d1 = UserId::new("d1");

        assert_eq!(pending(&orders).len(), 1);
        assert_eq!(active_for_agent(&orders, &d1).len(), 1);
        assert_eq!(history_for_agent(&orders, &d1).len(), 1);
        assert!(active_for_agent(&orders, &UserId::new("d2")).is_empty());
    }

    #[test]
    fn should_list_only_own_orders_for_consumer() {
        let (orders, alice) = fixture();
        assert_eq!(for_consumer(&orders, &alice.id).len(), 2);
    }

    #[test]
    fn should_show_farmer_only_their_lines() {
        let (orders, _) = fixture();
        let f1 = UserId::new("f1");

        let mine = for_farmer(&orders, &f1);

        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|fo| fo.lines.iter().all(|l| l.product.farmer_id == f1)));
        assert_eq!(mine[0].subtotal(), 40.0);
    }

    #[test]
    fn should_count_farmer_stats() {
        let (orders, _) = fixture();
        let stats = farmer_stats(&demo_products(), &orders, &UserId::new("f1"));

        assert_eq!(
            stats,
            FarmerStats {
                products: 2,
                orders: 2,
                pending_orders: 1,
            }
        );
    }
}
