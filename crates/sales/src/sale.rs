use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, SaleId};
use stockbook_inventory::Product;

/// A completed transaction against one product.
///
/// Name and unit price are copied from the product when the sale is recorded,
/// so later product edits do not rewrite history. The total is derived from
/// price and quantity on every read and therefore cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    product_id: String,
    product_name: String,
    unit_price: f64,
    quantity: i64,
    recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Snapshot `product` for a sale of `quantity` units at `recorded_at`.
    pub fn from_product(product: &Product, quantity: i64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: SaleId::new(),
            product_id: product.id().to_string(),
            product_name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            recorded_at,
        }
    }

    pub fn id(&self) -> SaleId {
        self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// `unit_price × quantity`.
    pub fn total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    /// Change the quantity sold; the total follows.
    ///
    /// Fails with `InvalidArgument` for a non-positive quantity, leaving the
    /// sale unchanged.
    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "sale quantity must be positive, got {quantity}"
            )));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Change the unit price; the total follows.
    ///
    /// Fails with `InvalidArgument` for a negative or non-finite price,
    /// leaving the sale unchanged.
    pub fn set_unit_price(&mut self, unit_price: f64) -> DomainResult<()> {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "unit price must be a finite non-negative number, got {unit_price}"
            )));
        }
        self.unit_price = unit_price;
        Ok(())
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Sale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sale[ID={}, Product={}, Unit Price={:.2}, Quantity={}, Total={:.2}, Date={}]",
            self.id,
            self.product_name,
            self.unit_price,
            self.quantity,
            self.total(),
            self.recorded_at.to_rfc3339()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_sale(quantity: i64) -> Sale {
        let product = Product::new("P001", "Mouse", 10.0, 5);
        Sale::from_product(&product, quantity, Utc::now())
    }

    #[test]
    fn snapshots_product_name_and_price() {
        let sale = mouse_sale(3);
        assert_eq!(sale.product_id(), "P001");
        assert_eq!(sale.product_name(), "Mouse");
        assert_eq!(sale.unit_price(), 10.0);
        assert_eq!(sale.quantity(), 3);
        assert_eq!(sale.total(), 30.0);
    }

    #[test]
    fn setters_keep_total_in_sync() {
        let mut sale = mouse_sale(3);

        sale.set_quantity(4).unwrap();
        assert_eq!(sale.total(), 40.0);

        sale.set_unit_price(2.5).unwrap();
        assert_eq!(sale.total(), 10.0);
    }

    #[test]
    fn set_quantity_rejects_non_positive_values() {
        let mut sale = mouse_sale(3);
        let before = sale.clone();

        for quantity in [0, -1, i64::MIN] {
            assert!(matches!(
                sale.set_quantity(quantity),
                Err(DomainError::InvalidArgument(_))
            ));
        }
        assert_eq!(sale, before);
        assert_eq!(sale.total(), 30.0);
    }

    #[test]
    fn set_unit_price_rejects_negative_and_non_finite_values() {
        let mut sale = mouse_sale(3);
        let before = sale.clone();

        for price in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                sale.set_unit_price(price),
                Err(DomainError::InvalidArgument(_))
            ));
        }
        assert_eq!(sale, before);

        sale.set_unit_price(0.0).unwrap();
        assert_eq!(sale.total(), 0.0);
    }

    #[test]
    fn each_sale_gets_a_fresh_id() {
        assert_ne!(mouse_sale(1).id(), mouse_sale(1).id());
    }

    #[test]
    fn display_includes_total() {
        let sale = mouse_sale(2);
        let rendered = sale.to_string();
        assert!(rendered.contains("Product=Mouse"));
        assert!(rendered.contains("Unit Price=10.00"));
        assert!(rendered.contains("Total=20.00"));
    }

    #[test]
    fn serde_round_trip_preserves_snapshot() {
        let sale = mouse_sale(2);
        let json = serde_json::to_string(&sale).unwrap();
        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sale);
    }
}
