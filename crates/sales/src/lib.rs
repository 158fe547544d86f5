//! Sales domain module.
//!
//! Records sales against the inventory: every recorded sale decrements stock
//! in the same locked step that appends it to the ledger.

pub mod event;
pub mod ledger;
pub mod sale;

pub use event::{SaleRecorded, SalesEvent};
pub use ledger::SaleLedger;
pub use sale::Sale;
