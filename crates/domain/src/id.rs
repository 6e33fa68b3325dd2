//! UUID-backed identifier newtypes, one per entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a copyable UUID wrapper so user and student keys cannot be
/// mixed up at call sites. Serializes as the bare UUID string.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Mint a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.parse().map(Self)
            }
        }
    };
}

entity_id!(
    /// Key of a staff account.
    UserId
);

entity_id!(
    /// Key of a student record.
    StudentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mint_distinct_ids() {
        assert_ne!(StudentId::new(), StudentId::new());
    }

    #[test]
    fn should_roundtrip_through_display_and_parse() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_uuid_string() {
        let id = StudentId::new();
        let value = serde_json::to_value(id).unwrap();
        let text = value.as_str().expect("expected a JSON string");
        assert_eq!(text.parse::<StudentId>().unwrap(), id);
    }

    #[test]
    fn should_reject_malformed_uuid() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }
}
