//! `stockbook-core`: building blocks shared by the inventory, sales and reporting crates.
//!
//! This crate contains **pure domain** primitives: the ordered store, its
//! lock-guarded wrapper and snapshot listings, identifiers, events and the error model.

pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod shared;
pub mod store;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::{EVENT_VERSION, Event};
pub use id::SaleId;
pub use shared::{Listing, SharedStore};
pub use store::{Direction, OrderedStore, Traverse};
