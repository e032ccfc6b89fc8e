//! Inventory domain module.
//!
//! `InventoryStore` holds the item → quantity mapping and is pure: every
//! mutation returns a `DomainResult` describing what happened and performs no
//! logging. `Inventory` wraps a store and routes those outcomes to `tracing`,
//! absorbing input and lookup failures. Only persistence I/O failures reach the
//! caller as errors.

pub mod activity;
pub mod command;
pub mod persistence;
pub mod report;
pub mod service;
pub mod store;

pub use activity::ActivityLog;
pub use command::StockCommand;
pub use persistence::{DEFAULT_INVENTORY_PATH, LoadOutcome, PersistenceError};
pub use report::{REPORT_HEADING, format_report, write_report};
pub use service::Inventory;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, StockChange};
