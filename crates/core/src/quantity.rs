//! Item quantities.

use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// Quantity of an item. Any sign is representable; see the inventory store
/// for when zero or negative quantities survive.
pub type Quantity = i64;

/// Validate an untyped JSON value as a quantity.
///
/// Accepts JSON integers that fit in `i64`. Floats (including `5.0`), numeric
/// strings such as `"5"`, and every other JSON type are rejected.
pub fn quantity_from_value(value: &JsonValue) -> DomainResult<Quantity> {
    match value {
        JsonValue::Number(n) => n.as_i64().ok_or_else(|| {
            DomainError::validation(format!("quantity must be an integer, got {n}"))
        }),
        other => Err(DomainError::validation(format!(
            "quantity must be an integer, got {other}"
        ))),
    }
}
