use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum OrderStatus {
    /// Placed by a consumer, waiting for a delivery agent.
    Pending,
    /// Picked up by a delivery agent, priced by distance.
    Accepted,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Legal transitions. Anything not listed is rejected.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Accepted, OrderStatus::Delivered)
                | (OrderStatus::Accepted, OrderStatus::Cancelled)
        )
    }

    pub fn is_final(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A delivery-side change to an order, one variant per intent.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryUpdate {
    Accept { agent: UserId, distance_km: f64 },
    Deliver { agent: UserId },
    Cancel { agent: UserId },
}

impl DeliveryUpdate {
    pub fn target_status(&self) -> OrderStatus {
        match self {
            DeliveryUpdate::Accept { .. } => OrderStatus::Accepted,
            DeliveryUpdate::Deliver { .. } => OrderStatus::Delivered,
            DeliveryUpdate::Cancel { .. } => OrderStatus::Cancelled,
        }
    }
}
