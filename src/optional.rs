//! Optional Values
//!
//! A tri-state wrapper distinguishing "field absent from the wire" from
//! "field present with a value". Every request and response type in this
//! crate uses it for fields the protocol marks OPTIONAL.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be logically absent from the wire.
///
/// Unlike a plain `Option`, absence here means the parameter or JSON member
/// is not emitted at all; a present value is always emitted, even when it is
/// an empty string or a zero duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// The field is not present on the wire.
    #[default]
    Absent,
    /// The field is present with the given value.
    Present(T),
}

impl<T> Optional<T> {
    /// Check whether a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Check whether the field is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the contained value, if present.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Get the contained value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Map the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Get the contained value or a fallback.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Convert into a plain `Option`, losing the wire-presence distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl From<&str> for Optional<String> {
    fn from(value: &str) -> Self {
        Self::Present(value.to_string())
    }
}

/// A present value serializes transparently as the value itself. Absent
/// values must never reach a serializer; fields are annotated with
/// `#[serde(skip_serializing_if = "Optional::is_absent")]` so serde skips
/// them before this impl runs.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => Err(serde::ser::Error::custom(
                "attempted to serialize an absent optional value",
            )),
        }
    }
}

/// Deserializing always yields a present value; absence is handled by
/// `#[serde(default)]` on the field, which never invokes this impl.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Present)
    }
}
