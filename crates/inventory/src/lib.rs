//! Inventory domain module.
//!
//! Owns the product catalogue and its stock levels. Every mutation validates
//! first and mutates second, and returns an event describing what changed.

pub mod event;
pub mod product;
pub mod store;

pub use event::{InventoryEvent, ProductAdded, ProductDeleted, ProductUpdated};
pub use product::{Product, ProductFields};
pub use store::InventoryStore;
