use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::pricing::{delivery_cost, validate_distance};
use super::value_objects::{DeliveryUpdate, OrderStatus};
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::shared::value_objects::{OrderId, UserId};
use crate::domain::user::model::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub consumer_id: UserId,
    pub consumer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_id: Option<UserId>,
    /// Frozen copy of the cart at checkout time.
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_cost: Option<f64>,
}

impl Order {
    /// Builds a pending order from the consumer's cart. The cart itself is
    /// left untouched; callers clear it.
    pub fn from_cart(consumer: &User, cart: &Cart, address: &str) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let address = address.trim();
        if address.is_empty() {
            return Err(OrderError::AddressEmpty);
        }

        Ok(Self {
            id: OrderId::generate(),
            consumer_id: consumer.id.clone(),
            consumer_name: consumer.name.clone(),
            delivery_id: None,
            items: cart.items().to_vec(),
            total_amount: cart.total(),
            status: OrderStatus::Pending,
            delivery_address: address.to_string(),
            created_at: Utc::now(),
            distance_km: None,
            delivery_cost: None,
        })
    }

    pub fn is_assigned_to(&self, agent: &UserId) -> bool {
        self.delivery_id.as_ref() == Some(agent)
    }

    /// Applies a delivery-side update, checking the transition table and
    /// the agent assignment first. On error the order is unchanged.
    pub fn apply(&mut self, update: DeliveryUpdate) -> Result<(), OrderError> {
        let next = update.target_status();
        if !self.status.can_transition_to(next) {
            return Err(OrderError::IllegalTransition {
                from: self.status,
                to: next,
            });
        }

        match update {
            DeliveryUpdate::Accept { agent, distance_km } => {
                let distance_km = validate_distance(distance_km)?;
                self.delivery_id = Some(agent);
                self.distance_km = Some(distance_km);
                self.delivery_cost = Some(delivery_cost(distance_km));
            }
            DeliveryUpdate::Deliver { agent } => {
                if !self.is_assigned_to(&agent) {
                    return Err(OrderError::NotAssignedAgent);
                }
            }
            DeliveryUpdate::Cancel { agent } => {
                if self.delivery_id.is_some() && !self.is_assigned_to(&agent) {
                    return Err(OrderError::NotAssignedAgent);
                }
            }
        }

        self.status = next;
        Ok(())
    }

    /// Lines of this order that belong to the given farmer.
    pub fn items_from_farmer<'a>(
        &'a self,
        farmer_id: &'a UserId,
    ) -> impl Iterator<Item = &'a CartItem> + 'a {
        self.items
            .iter()
            .filter(move |item| &item.product.farmer_id == farmer_id)
    }
}
