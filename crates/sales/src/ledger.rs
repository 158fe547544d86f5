use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use stockbook_core::{Direction, DomainResult, Listing, OrderedStore, SaleId, SharedStore};
use stockbook_inventory::{InventoryStore, Product};

use crate::event::SaleRecorded;
use crate::sale::Sale;

/// Append-only history of sales.
///
/// Shares the inventory through an `Arc` and is the only component that
/// decrements stock. Whenever both locks are held the order is ledger first,
/// then inventory.
#[derive(Debug)]
pub struct SaleLedger {
    inventory: Arc<InventoryStore>,
    sales: SharedStore<Sale>,
}

impl SaleLedger {
    pub fn new(inventory: Arc<InventoryStore>) -> Self {
        Self {
            inventory,
            sales: SharedStore::new(),
        }
    }

    pub fn inventory(&self) -> &Arc<InventoryStore> {
        &self.inventory
    }

    /// Sell `quantity` units of `product_id`.
    ///
    /// Fails with `NotFound` for an unknown product, `InvalidArgument` for a
    /// non-positive quantity and `InsufficientStock` when fewer units are on
    /// hand. On success the stock decrement and the ledger append happen
    /// under both locks, so no caller can observe one without the other.
    pub fn record_sale(&self, product_id: &str, quantity: i64) -> DomainResult<SaleRecorded> {
        let recorded = self
            .sales
            .write(|sales| -> DomainResult<SaleRecorded> {
                let (sale, remaining_stock) =
                    self.inventory.with_product_mut(product_id, |product| {
                        let recorded_at = Utc::now();
                        product.remove_stock(quantity)?;
                        let sale = Sale::from_product(product, quantity, recorded_at);
                        Ok((sale, product.quantity()))
                    })?;
                sales.append(sale.clone());
                Ok(SaleRecorded {
                    sale,
                    remaining_stock,
                })
            })
            .inspect_err(|e| warn!(product_id = %product_id, quantity, error = %e, "sale rejected"))?;

        let sale = &recorded.sale;
        info!(
            sale_id = %sale.id(),
            product_id = %sale.product_id(),
            quantity = sale.quantity(),
            unit_price = sale.unit_price(),
            total = sale.total(),
            remaining_stock = recorded.remaining_stock,
            "sale recorded"
        );
        Ok(recorded)
    }

    /// Sales in recording order, as of the call.
    pub fn list_sales(&self) -> Listing<Sale> {
        self.sales.listing(Direction::Forward)
    }

    /// Copy of the ledger taken at call time.
    pub fn all_sales(&self) -> OrderedStore<Sale> {
        self.sales.snapshot()
    }

    /// Copy of the sale with `id`, if recorded.
    pub fn find_sale(&self, id: &SaleId) -> Option<Sale> {
        self.sales.read(|sales| sales.find_by_id(id).cloned())
    }

    /// Copy of every sale referencing `product_id`, in recording order.
    pub fn sales_for_product(&self, product_id: &str) -> OrderedStore<Sale> {
        self.sales.read(|sales| {
            sales
                .iter()
                .filter(|s| s.product_id() == product_id)
                .cloned()
                .collect()
        })
    }

    /// Run `f` over the live ledger under its read lock.
    pub fn with_sales<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&OrderedStore<Sale>) -> R,
    {
        self.sales.read(f)
    }

    /// Run `f` over the ledger and the inventory as of one instant.
    ///
    /// Takes both read locks in the same order as [`record_sale`](Self::record_sale),
    /// so no sale can land between the two reads.
    pub fn read_with_inventory<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&OrderedStore<Sale>, &OrderedStore<Product>) -> R,
    {
        self.sales
            .read(|sales| self.inventory.with_products(|products| f(sales, products)))
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
