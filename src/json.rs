//! JSON Field Converters
//!
//! Per-field serde rules layered on top of the generic snake_case mapping:
//! scope lists travel as a single space-separated JSON string, and lifetimes
//! travel as a plain JSON number of seconds. Response types opt in with
//! `#[serde(with = ...)]` per field; everything else is plain serde.

use std::time::Duration;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::optional::Optional;

/// An optional scope list as a single space-separated JSON string.
pub mod scope_list {
    use super::*;
    use crate::fields::{join_scope, split_scope};

    pub fn serialize<S: Serializer>(
        value: &Optional<Vec<String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let Optional::Present(scope) = value else {
            return Err(S::Error::custom("attempted to serialize an absent scope"));
        };

        if scope.iter().any(|s| s.chars().any(char::is_whitespace)) {
            return Err(S::Error::custom(
                "space-separated values may not contain whitespace",
            ));
        }

        serializer.serialize_str(&join_scope(scope))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Optional<Vec<String>>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Optional::Present(split_scope(&raw)))
    }
}

/// A mandatory lifetime as a JSON number of seconds. Whole-second values
/// stay integers so captured sample payloads survive byte-level round trips.
pub mod duration_secs {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let seconds = value.as_secs_f64();
        if seconds.fract() == 0.0 {
            serializer.serialize_u64(seconds as u64)
        } else {
            serializer.serialize_f64(seconds)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(seconds)
            .map_err(|_| D::Error::custom("lifetime must be a non-negative number of seconds"))
    }
}

/// An optional lifetime as a JSON number of seconds.
pub mod optional_duration_secs {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Optional<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let Optional::Present(duration) = value else {
            return Err(S::Error::custom("attempted to serialize an absent lifetime"));
        };

        duration_secs::serialize(duration, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Optional<Duration>, D::Error> {
        duration_secs::deserialize(deserializer).map(Optional::Present)
    }
}
