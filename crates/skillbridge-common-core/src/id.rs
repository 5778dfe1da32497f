//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed ID wrapper.
///
/// Identifiers are store-assigned, monotonically increasing integers; the
/// newtype keeps a course id from ever being handed to a job lookup.
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[doc = concat!("A unique identifier for a ", $entity, ".")]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store-assigned value.
            pub const fn from_raw(value: i64) -> Self {
                Self(value)
            }

            /// Parse from a decimal string.
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }

            /// Get the raw value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

/// Error parsing an ID.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdParseError {
    /// The ID format is invalid.
    #[error("invalid ID format")]
    InvalidFormat,
}

// Define all ID types
define_id!(UserId, "user");
define_id!(CourseId, "course");
define_id!(JobId, "job");
define_id!(EnrollmentId, "enrollment");
define_id!(ApplicationId, "application");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_roundtrip() {
        let id = CourseId::from_raw(42);
        let s = id.to_string();
        let parsed = CourseId::parse(&s).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_display_is_plain_number() {
        assert_eq!(UserId::from_raw(7).to_string(), "7");
        assert_eq!(JobId::from_raw(1).to_string(), "1");
    }

    #[test]
    fn test_id_serialization() {
        let id = UserId::from_raw(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!(CourseId::parse("not-a-number").is_err());
        assert!(CourseId::parse("").is_err());
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        assert_eq!(EnrollmentId::parse(" 12 ").unwrap(), EnrollmentId::from_raw(12));
    }

    proptest::proptest! {
        #[test]
        fn prop_id_roundtrip(raw in proptest::num::i64::ANY) {
            let id = ApplicationId::from_raw(raw);
            let parsed = ApplicationId::parse(&id.to_string()).unwrap();
            proptest::prop_assert_eq!(id, parsed);
        }
    }
}
