//! Inventory service: a store bound to a file, with diagnostics.
//!
//! Severity policy:
//! - info: successful add/remove/load/save
//! - warn: invalid input, missing item on remove, missing file on load,
//!   blank item names skipped on load
//! - error: corrupted inventory file
//!
//! Input and lookup failures are absorbed here (logged, no mutation). Only
//! persistence I/O failures are returned to the caller.

use std::path::{Path, PathBuf};

use chrono::Utc;

use stockkeep_core::{DomainError, DomainResult, Quantity};

use crate::activity::ActivityLog;
use crate::command::StockCommand;
use crate::persistence::{DEFAULT_INVENTORY_PATH, LoadOutcome, PersistenceError};
use crate::report::format_report;
use crate::store::{InventoryStore, StockChange};

#[derive(Debug, Clone)]
pub struct Inventory {
    store: InventoryStore,
    path: PathBuf,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory persisted at [`DEFAULT_INVENTORY_PATH`].
    pub fn new() -> Self {
        Self::with_path(DEFAULT_INVENTORY_PATH)
    }

    /// Empty inventory persisted at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store: InventoryStore::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Add `qty` of `item`. Returns whether the inventory changed.
    pub fn add(&mut self, item: &str, qty: Quantity, log: Option<&mut ActivityLog>) -> bool {
        let result = self.store.add(item, qty);
        record(result, log)
    }

    /// Remove `qty` of `item`. Returns whether the inventory changed.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> bool {
        let result = self.store.remove(item, qty);
        record(result, None)
    }

    /// Execute an untyped command. Returns whether the inventory changed.
    pub fn execute(&mut self, command: &StockCommand, log: Option<&mut ActivityLog>) -> bool {
        let result = self.store.execute(command);
        record(result, log)
    }

    pub fn quantity(&self, item: &str) -> Quantity {
        self.store.quantity(item)
    }

    pub fn low_stock(&self, threshold: Quantity) -> Vec<String> {
        self.store.low_stock(threshold)
    }

    pub fn report(&self) -> String {
        format_report(&self.store)
    }

    /// Load from the bound path.
    pub fn load(&mut self) -> Result<LoadOutcome, PersistenceError> {
        let path = self.path.clone();
        self.load_from(path)
    }

    /// Load from `path`, replacing the whole mapping.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, PersistenceError> {
        let path = path.as_ref();
        let outcome = self.store.load(path)?;
        match &outcome {
            LoadOutcome::Loaded { items, skipped } => {
                if *skipped > 0 {
                    tracing::warn!(
                        path = %path.display(),
                        skipped,
                        "skipped inventory entries with blank item names"
                    );
                }
                tracing::info!(path = %path.display(), items, "inventory loaded");
            }
            LoadOutcome::Missing => {
                tracing::warn!(path = %path.display(), "no inventory file found; starting fresh");
            }
            LoadOutcome::Corrupt { reason } => {
                tracing::error!(
                    path = %path.display(),
                    reason = %reason,
                    "inventory file corrupted; starting fresh"
                );
            }
        }
        Ok(outcome)
    }

    /// Save to the bound path.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.save_to(&self.path)
    }

    /// Save to `path`, overwriting it.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        self.store.save(path)?;
        tracing::info!(path = %path.display(), items = self.store.len(), "inventory saved");
        Ok(())
    }
}

fn record(result: DomainResult<StockChange>, log: Option<&mut ActivityLog>) -> bool {
    match result {
        Ok(StockChange::Added {
            item,
            qty,
            quantity,
        }) => {
            tracing::info!(item = %item, qty, quantity, "added stock");
            if let Some(log) = log {
                log.record_addition(Utc::now(), &item, qty);
            }
            true
        }
        Ok(StockChange::Removed {
            item,
            qty,
            remaining,
        }) => {
            match remaining {
                Some(remaining) => tracing::info!(item = %item, qty, remaining, "removed stock"),
                None => tracing::info!(item = %item, qty, "removed stock; item deleted"),
            }
            true
        }
        Err(DomainError::Validation(reason)) => {
            tracing::warn!(reason = %reason, "invalid stock input ignored");
            false
        }
        Err(DomainError::NotFound(item)) => {
            tracing::warn!(item = %item, "attempted to remove missing item");
            false
        }
    }
}
