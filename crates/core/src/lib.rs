//! `stockkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod error;
pub mod item_name;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item_name::ItemName;
pub use quantity::{Quantity, quantity_from_value};
pub use value_object::ValueObject;
