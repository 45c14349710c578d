//! Entity identifiers
//!
//! Every persisted entity is keyed by a UUIDv7 newtype. UUIDv7 values sort
//! chronologically, which keeps insertion order stable in the store.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u128);

        impl $name {
            /// Generate a new UUIDv7-based identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7().as_u128())
            }

            /// Create an identifier from a raw u128 value
            ///
            /// This is primarily for storage layer deserialization.
            pub fn from_value(value: u128) -> Self {
                Self(value)
            }

            /// Parse an identifier from a UUID string
            pub fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map(|u| Self(u.as_u128()))
                    .map_err(|e| format!("Invalid {} string: {}", stringify!($name), e))
            }

            /// Get the raw u128 value
            pub fn value(&self) -> u128 {
                self.0
            }

            /// Big-endian byte form used as the storage key
            pub fn to_bytes(&self) -> [u8; 16] {
                self.0.to_be_bytes()
            }

            /// Rebuild an identifier from its storage key
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
                let arr: [u8; 16] = bytes.try_into().map_err(|_| {
                    format!(
                        "Expected 16 bytes for {}, got {}",
                        stringify!($name),
                        bytes.len()
                    )
                })?;
                Ok(Self(u128::from_be_bytes(arr)))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", uuid::Uuid::from_u128(self.0))
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a club
    ClubId
);
entity_id!(
    /// Unique identifier for a shot type
    ShotTypeId
);
entity_id!(
    /// Unique identifier for a range session
    SessionId
);
entity_id!(
    /// Unique identifier for a logged shot
    ShotId
);
entity_id!(
    /// Unique identifier for a stored session result
    StoredShotTypeId
);
entity_id!(
    /// Unique identifier for the user profile
    ProfileId
);
entity_id!(
    /// Unique identifier for the app settings record
    SettingsId
);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ordering matches the underlying u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = ClubId::from_value(a);
            let id_b = ClubId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = ShotId::from_value(value);
            match ShotId::from_string(&id.to_string()) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }
    }
}
