use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::Event;

use crate::product::ProductFields;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductUpdated, carrying the mutable fields before and after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product_id: String,
    pub before: ProductFields,
    pub after: ProductFields,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductDeleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDeleted {
    pub product_id: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    ProductUpdated(ProductUpdated),
    ProductDeleted(ProductDeleted),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::ProductUpdated(_) => "inventory.product.updated",
            InventoryEvent::ProductDeleted(_) => "inventory.product.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductAdded(e) => e.occurred_at,
            InventoryEvent::ProductUpdated(e) => e.occurred_at,
            InventoryEvent::ProductDeleted(e) => e.occurred_at,
        }
    }
}

impl From<ProductAdded> for InventoryEvent {
    fn from(value: ProductAdded) -> Self {
        Self::ProductAdded(value)
    }
}

impl From<ProductUpdated> for InventoryEvent {
    fn from(value: ProductUpdated) -> Self {
        Self::ProductUpdated(value)
    }
}

impl From<ProductDeleted> for InventoryEvent {
    fn from(value: ProductDeleted) -> Self {
        Self::ProductDeleted(value)
    }
}
