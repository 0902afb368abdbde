use super::value_objects::OrderStatus;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_authenticated")]
    NotAuthenticated,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.address_empty")]
    AddressEmpty,
    #[error("order.not_found")]
    NotFound,
    #[error("order.illegal_transition")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },
    #[error("order.invalid_distance")]
    InvalidDistance,
    #[error("order.delivery_only")]
    DeliveryOnly,
    #[error("order.not_assigned_agent")]
    NotAssignedAgent,
    #[error("order.payment_declined")]
    PaymentDeclined,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.declined")]
    Declined,
}
