use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::Event;

use crate::sale::Sale;

/// Event: SaleRecorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecorded {
    pub sale: Sale,
    /// Units left on hand after the decrement.
    pub remaining_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SalesEvent {
    SaleRecorded(SaleRecorded),
}

impl Event for SalesEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SalesEvent::SaleRecorded(_) => "sales.sale.recorded",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SalesEvent::SaleRecorded(e) => e.sale.recorded_at(),
        }
    }
}

impl From<SaleRecorded> for SalesEvent {
    fn from(value: SaleRecorded) -> Self {
        Self::SaleRecorded(value)
    }
}
