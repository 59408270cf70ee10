//! Three-state optional field for writable resource attributes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A writable attribute that distinguishes "leave alone" from "clear".
///
/// - `Absent`: omitted from the request body; the server keeps its value
/// - `Null`: sent as `null`; the server clears the attribute
/// - `Value(v)`: sent as `v`
///
/// Fields of this type should carry
/// `#[serde(default, skip_serializing_if = "Field::is_absent")]`. With that,
/// a key missing from a response deserializes to `Absent`, an explicit
/// `null` to `Null`, and anything else to `Value`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::Field;
///
/// let title: Field<String> = "News".to_string().into();
/// assert_eq!(title.as_ref(), Some(&"News".to_string()));
///
/// let cleared: Field<String> = Field::Null;
/// assert!(cleared.as_ref().is_none());
/// assert!(!cleared.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Not sent.
    Absent,
    /// Sent as `null`.
    Null,
    /// Sent as the contained value.
    Value(T),
}

impl<T> Field<T> {
    /// `true` for [`Field::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// `true` for [`Field::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if there is one.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts into an `Option`, collapsing `Absent` and `Null` to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}
