use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum UserRole {
    Farmer,
    Consumer,
    Delivery,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Farmer => "Farmer",
            UserRole::Consumer => "Consumer",
            UserRole::Delivery => "Delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

pub struct NewUserProps {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, AuthError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(AuthError::NameEmpty);
        }

        let email = props.email.trim();
        if !email.contains('@') {
            return Err(AuthError::EmailInvalid);
        }

        Ok(Self {
            id: UserId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            role: props.role,
        })
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}
