//! Untyped stock commands.
//!
//! Commands arrive from scripts or other JSON callers where nothing guarantees
//! that an item is a string or a quantity an integer. Validation happens when
//! a command is executed against a store, not when it is deserialized.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single add/remove request with unvalidated fields.
///
/// Wire form: `{"op": "add", "item": "apple", "qty": 10}`. Missing fields
/// deserialize as `null` and fail validation on execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StockCommand {
    Add {
        #[serde(default)]
        item: JsonValue,
        #[serde(default)]
        qty: JsonValue,
    },
    Remove {
        #[serde(default)]
        item: JsonValue,
        #[serde(default)]
        qty: JsonValue,
    },
}

impl StockCommand {
    pub fn add(item: impl Into<JsonValue>, qty: impl Into<JsonValue>) -> Self {
        StockCommand::Add {
            item: item.into(),
            qty: qty.into(),
        }
    }

    pub fn remove(item: impl Into<JsonValue>, qty: impl Into<JsonValue>) -> Self {
        StockCommand::Remove {
            item: item.into(),
            qty: qty.into(),
        }
    }

    /// Parse a JSON array of commands.
    pub fn parse_batch(json: &str) -> Result<Vec<StockCommand>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
