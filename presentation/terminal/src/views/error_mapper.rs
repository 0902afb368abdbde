use business::domain::cart::errors::CartError;
use business::domain::errors::RepositoryError;
use business::domain::order::errors::OrderError;
use business::domain::product::errors::ProductError;
use business::domain::user::errors::AuthError;

pub const LOGIN_FAILED: &str = "Invalid credentials or user not found.";

/// Turns an error code into the sentence shown to the user.
pub trait IntoMessage {
    fn into_message(self) -> String;
}

impl IntoMessage for RepositoryError {
    fn into_message(self) -> String {
        "Could not save your changes. Please try again.".to_string()
    }
}

impl IntoMessage for AuthError {
    fn into_message(self) -> String {
        match self {
            AuthError::InvalidCredentials => LOGIN_FAILED.to_string(),
            AuthError::EmailTaken => "Email already in use.".to_string(),
            AuthError::NameEmpty => "Please enter your full name.".to_string(),
            AuthError::EmailInvalid => "Please enter a valid email address.".to_string(),
            AuthError::Repository(err) => err.into_message(),
        }
    }
}

impl IntoMessage for ProductError {
    fn into_message(self) -> String {
        match self {
            ProductError::NameEmpty => "Product name is required.".to_string(),
            ProductError::InvalidPrice => "Price must be zero or more.".to_string(),
            ProductError::PreOrderDateMissing => {
                "Pre-orders need an estimated availability date.".to_string()
            }
            ProductError::FarmerOnly => "Only farmers can list products.".to_string(),
            ProductError::NotFound => "Product not found.".to_string(),
            ProductError::Repository(err) => err.into_message(),
        }
    }
}

impl IntoMessage for CartError {
    fn into_message(self) -> String {
        match self {
            CartError::InvalidQuantity => "Quantity must be at least 1.".to_string(),
            CartError::ProductNotFound => "Product not found.".to_string(),
            CartError::OutOfStock => "This product is sold out.".to_string(),
            CartError::ExceedsStock { available, .. } => {
                format!("Only {available} available.")
            }
            CartError::Repository(err) => err.into_message(),
        }
    }
}

impl IntoMessage for OrderError {
    fn into_message(self) -> String {
        match self {
            OrderError::NotAuthenticated => "Please log in first.".to_string(),
            OrderError::EmptyCart => "Your cart is empty.".to_string(),
            OrderError::AddressEmpty => "Please enter a delivery address.".to_string(),
            OrderError::NotFound => "Order not found.".to_string(),
            OrderError::IllegalTransition { from, to } => {
                format!("An order that is {from} cannot become {to}.")
            }
            OrderError::InvalidDistance => "Please enter a valid distance in KM.".to_string(),
            OrderError::DeliveryOnly => "Only delivery partners can do that.".to_string(),
            OrderError::NotAssignedAgent => "This order is assigned to someone else.".to_string(),
            OrderError::PaymentDeclined => "Payment Failed! Please try again.".to_string(),
            OrderError::Repository(err) => err.into_message(),
        }
    }
}
