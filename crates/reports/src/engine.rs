use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockbook_core::{DomainError, DomainResult, OrderedStore};
use stockbook_inventory::{InventoryStore, Product};
use stockbook_sales::{Sale, SaleLedger};

/// The product with the highest aggregated revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub product_id: String,
    pub name: String,
    /// Current inventory price, not the price at time of sale.
    pub unit_price: f64,
    pub revenue: f64,
    pub quantity_sold: i64,
}

/// Headline numbers computed from one consistent read of both stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub product_count: usize,
    pub out_of_stock_count: usize,
    pub sale_count: usize,
    pub total_revenue: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct ProductTotals {
    revenue: f64,
    quantity: i64,
}

/// Read-only aggregations over the inventory and the sale ledger.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    inventory: Arc<InventoryStore>,
    ledger: Arc<SaleLedger>,
}

impl ReportEngine {
    /// Wire the engine to both stores.
    ///
    /// Fails with `InvalidArgument` when `ledger` records against a different
    /// inventory than `inventory`, since the reports would then mix two worlds.
    pub fn new(inventory: Arc<InventoryStore>, ledger: Arc<SaleLedger>) -> DomainResult<Self> {
        if !Arc::ptr_eq(&inventory, ledger.inventory()) {
            return Err(DomainError::invalid_argument(
                "sale ledger is bound to a different inventory store",
            ));
        }
        Ok(Self { inventory, ledger })
    }

    /// Wire the engine to `ledger` and the inventory it records against.
    pub fn for_ledger(ledger: Arc<SaleLedger>) -> Self {
        Self {
            inventory: Arc::clone(ledger.inventory()),
            ledger,
        }
    }

    pub fn total_product_count(&self) -> usize {
        self.inventory.len()
    }

    /// Sum of every sale total; `0.0` for an empty ledger.
    pub fn total_revenue(&self) -> f64 {
        let revenue = self.ledger.with_sales(|sales| revenue_of(sales.iter()));
        debug!(revenue, "computed total revenue");
        revenue
    }

    /// Product with the strictly greatest revenue, ties going to the earliest
    /// product in inventory order.
    ///
    /// `None` when the inventory is empty or no product has positive revenue.
    pub fn top_selling_product(&self) -> Option<TopSeller> {
        let top = self
            .ledger
            .read_with_inventory(|sales, products| top_seller(sales, products));
        debug!(product_id = ?top.as_ref().map(|t| t.product_id.as_str()), "computed top seller");
        top
    }

    /// Products with zero units on hand, in inventory order.
    pub fn out_of_stock_products(&self) -> OrderedStore<Product> {
        self.inventory.with_products(|products| {
            products
                .iter()
                .filter(|p| p.is_out_of_stock())
                .cloned()
                .collect()
        })
    }

    pub fn summary(&self) -> InventorySummary {
        self.ledger.read_with_inventory(|sales, products| InventorySummary {
            product_count: products.len(),
            out_of_stock_count: products.iter().filter(|p| p.is_out_of_stock()).count(),
            sale_count: sales.len(),
            total_revenue: revenue_of(sales.iter()),
        })
    }
}

fn revenue_of<'a>(sales: impl Iterator<Item = &'a Sale>) -> f64 {
    sales.fold(0.0, |acc, sale| acc + sale.total())
}

fn top_seller(sales: &OrderedStore<Sale>, products: &OrderedStore<Product>) -> Option<TopSeller> {
    let mut totals: HashMap<&str, ProductTotals> = HashMap::new();
    for sale in sales {
        let entry = totals.entry(sale.product_id()).or_default();
        entry.revenue += sale.total();
        entry.quantity += sale.quantity();
    }

    let mut leader: Option<(&Product, ProductTotals)> = None;
    for product in products {
        let Some(candidate) = totals.get(product.id()).copied() else {
            continue;
        };
        let best = leader.map_or(0.0, |(_, t)| t.revenue);
        if candidate.revenue > best {
            leader = Some((product, candidate));
        }
    }

    leader.map(|(product, totals)| TopSeller {
        product_id: product.id().to_string(),
        name: product.name().to_string(),
        unit_price: product.price(),
        revenue: totals.revenue,
        quantity_sold: totals.quantity,
    })
}
