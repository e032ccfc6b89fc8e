//! Pure inventory store: validated mutation and queries over the item map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, ItemName, Quantity, quantity_from_value};

use crate::command::StockCommand;

/// Threshold used by low-stock queries when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Outcome of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockChange {
    /// `qty` was added to `item`, which now holds `quantity`.
    Added {
        item: ItemName,
        qty: Quantity,
        quantity: Quantity,
    },
    /// `qty` was taken from `item`. `remaining` is `None` when the item
    /// dropped to zero or below and was deleted.
    Removed {
        item: ItemName,
        qty: Quantity,
        remaining: Option<Quantity>,
    },
}

/// In-memory inventory: item name → quantity.
///
/// Invariants:
/// - every key has been added at least once
/// - `remove` never leaves an item at zero or below; `add` may
///
/// Iteration is ordered by item name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` to `item` (any sign, including zero).
    ///
    /// Fails without mutating when the name is empty or whitespace.
    pub fn add(&mut self, item: &str, qty: Quantity) -> DomainResult<StockChange> {
        let name = ItemName::parse(item)?;
        self.add_named(name, qty)
    }

    /// Add `qty` to an already validated item name.
    pub fn add_named(&mut self, item: ItemName, qty: Quantity) -> DomainResult<StockChange> {
        let current = self.quantity(item.as_str());
        let quantity = current.checked_add(qty).ok_or_else(|| {
            DomainError::validation(format!("adding {qty} to {item} overflows the quantity"))
        })?;
        self.items.insert(item.clone(), quantity);
        Ok(StockChange::Added { item, qty, quantity })
    }

    /// Take `qty` from `item`, deleting it once its quantity reaches zero or below.
    ///
    /// Fails without mutating when the item is not present.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> DomainResult<StockChange> {
        let Some((name, &current)) = self.items.get_key_value(item) else {
            return Err(DomainError::not_found(item));
        };
        let name = name.clone();
        let remaining = current.checked_sub(qty).ok_or_else(|| {
            DomainError::validation(format!("removing {qty} from {name} overflows the quantity"))
        })?;

        if remaining <= 0 {
            self.items.remove(item);
            Ok(StockChange::Removed {
                item: name,
                qty,
                remaining: None,
            })
        } else {
            self.items.insert(name.clone(), remaining);
            Ok(StockChange::Removed {
                item: name,
                qty,
                remaining: Some(remaining),
            })
        }
    }

    /// Apply an untyped command.
    ///
    /// For removals the quantity is validated before the item is looked up; an
    /// item that is not a JSON string can never be stored and is reported as
    /// missing.
    pub fn execute(&mut self, command: &StockCommand) -> DomainResult<StockChange> {
        match command {
            StockCommand::Add { item, qty } => {
                let name = ItemName::from_value(item)?;
                let qty = quantity_from_value(qty)?;
                self.add_named(name, qty)
            }
            StockCommand::Remove { item, qty } => {
                let qty = quantity_from_value(qty)?;
                match item.as_str() {
                    Some(item) => self.remove(item, qty),
                    None => Err(DomainError::not_found(item.to_string())),
                }
            }
        }
    }

    /// Stored quantity, or 0 when the item is absent.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole mapping.
    pub fn replace_all(&mut self, items: BTreeMap<ItemName, Quantity>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
