use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a string-backed identifier newtype.
///
/// Persisted snapshots keep the plain string form (`"p1"`, a UUID, ...),
/// so the wrapper is transparent to serde.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifies a registered user, whatever their role.
    UserId
);
string_id!(ProductId);
string_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("f1");
        assert_eq!(user_id.as_str(), "f1");
    }

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn should_display_product_id() {
        let product_id = ProductId::new("p3");
        assert_eq!(format!("{}", product_id), "p3");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("u-42")).unwrap();
        assert_eq!(json, "\"u-42\"");

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserId::from("u-42"));
    }
}
