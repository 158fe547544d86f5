use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity};

/// A sellable item held in inventory.
///
/// The identifier is fixed at construction. Name, price and quantity change only
/// through [`InventoryStore`](crate::InventoryStore) operations or a sale-driven
/// [`Product::remove_stock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    /// Unit price; finite and non-negative once the product is in a store.
    price: f64,
    /// Units on hand; never negative once the product is in a store.
    quantity: i64,
}

/// The mutable part of a product, as reported before/after an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Build an unvalidated product; [`InventoryStore::add_product`](crate::InventoryStore::add_product)
    /// rejects negative prices or quantities.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// Take `amount` units off the shelf.
    ///
    /// Fails with `InvalidArgument` for a non-positive amount and with
    /// `InsufficientStock` when `amount` exceeds the units on hand; in both
    /// cases the product is left untouched.
    pub fn remove_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "sale quantity must be positive, got {amount}"
            )));
        }
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(
                self.id.clone(),
                self.quantity,
                amount,
            ));
        }
        self.quantity -= amount;
        Ok(())
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        validate_price(self.price)?;
        validate_quantity(self.quantity)
    }

    pub(crate) fn overwrite(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.quantity = fields.quantity;
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product[ID={}, Name={}, Price={:.2}, Quantity={}]",
            self.id, self.name, self.price, self.quantity
        )
    }
}

pub(crate) fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::invalid_argument(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "price cannot be less than 0, got {price}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_argument(format!(
            "quantity cannot be less than 0, got {quantity}"
        )));
    }
    Ok(())
}
