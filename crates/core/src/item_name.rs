//! Item name value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of an inventory item.
///
/// Guaranteed non-empty after trimming whitespace. The text is kept exactly as
/// given (surrounding whitespace included), so `" apple"` and `"apple"` are
/// distinct items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Validate an untyped JSON value as an item name.
    ///
    /// Only JSON strings are accepted; numbers, booleans, null, arrays and
    /// objects are rejected.
    pub fn from_value(value: &JsonValue) -> DomainResult<Self> {
        match value {
            JsonValue::String(s) => Self::parse(s.as_str()),
            other => Err(DomainError::validation(format!(
                "item name must be a string, got {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Ordering and hashing match `str`, so maps keyed by `ItemName` can be queried with `&str`.
impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
