use chrono::Utc;
use tracing::{debug, info, warn};

use stockbook_core::{
    Direction, DomainError, DomainResult, Entity, Listing, OrderedStore, SharedStore,
};

use crate::event::{ProductAdded, ProductDeleted, ProductUpdated};
use crate::product::{Product, ProductFields, validate_price, validate_quantity};

/// Owner of every product; enforces identifier uniqueness.
///
/// All methods take `&self` and hold the store lock only for their own
/// duration, so an `Arc<InventoryStore>` can be shared with the sale ledger
/// and reporting. Lookups and listings hand out copies.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: SharedStore<Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new product.
    ///
    /// Fails with `DuplicateKey` when the id is already taken and with
    /// `InvalidArgument` for a negative price or quantity.
    pub fn add_product(&self, product: Product) -> DomainResult<ProductAdded> {
        let event = self.products.write(|products| -> DomainResult<ProductAdded> {
            if products.position_of(product.id()).is_some() {
                warn!(product_id = %product.id(), "rejected duplicate product id");
                return Err(DomainError::duplicate_key(product.id()));
            }
            product.validate()?;

            let event = ProductAdded {
                product_id: product.id().to_string(),
                name: product.name().to_string(),
                price: product.price(),
                quantity: product.quantity(),
                occurred_at: Utc::now(),
            };
            products.append(product);
            Ok(event)
        })?;

        info!(
            product_id = %event.product_id,
            name = %event.name,
            price = event.price,
            quantity = event.quantity,
            "product added"
        );
        Ok(event)
    }

    /// Copy of the product with `id`; `None` when there is none.
    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products.find_cloned(|p| p.has_id(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.read(|products| products.position_of(id).is_some())
    }

    /// Overwrite name, price and quantity of an existing product in place.
    ///
    /// Fails with `NotFound` for an unknown id, then with `InvalidArgument` for
    /// a negative price or quantity.
    pub fn update_product(
        &self,
        id: &str,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<ProductUpdated> {
        let after = ProductFields {
            name: name.into(),
            price,
            quantity,
        };

        let before = self.products.write(|products| -> DomainResult<ProductFields> {
            let product = products
                .find_by_id_mut(id)
                .ok_or_else(|| DomainError::not_found(id))?;
            validate_price(price)?;
            validate_quantity(quantity)?;

            let before = product.fields();
            product.overwrite(after.clone());
            Ok(before)
        })?;

        info!(
            product_id = %id,
            old_name = %before.name,
            new_name = %after.name,
            old_price = before.price,
            new_price = after.price,
            old_quantity = before.quantity,
            new_quantity = after.quantity,
            "product updated"
        );
        Ok(ProductUpdated {
            product_id: id.to_string(),
            before,
            after,
            occurred_at: Utc::now(),
        })
    }

    /// Remove the product with `id`.
    ///
    /// A missing id is not an error: the call is a no-op and returns `None`.
    pub fn delete_product(&self, id: &str) -> Option<ProductDeleted> {
        let removed = self.products.write(|products| {
            let index = products.position_of(id)?;
            products.remove_at(index).ok()
        });

        let Some(removed) = removed else {
            debug!(product_id = %id, "delete ignored, product not found");
            return None;
        };

        info!(product_id = %id, name = %removed.name(), "product deleted");
        Some(ProductDeleted {
            product_id: removed.id().to_string(),
            name: removed.name().to_string(),
            occurred_at: Utc::now(),
        })
    }

    /// Products in insertion order, as of the call.
    pub fn list_forward(&self) -> Listing<Product> {
        self.products.listing(Direction::Forward)
    }

    /// Products in reverse insertion order, as of the call.
    pub fn list_backward(&self) -> Listing<Product> {
        self.products.listing(Direction::Backward)
    }

    /// Copy of every product, in insertion order.
    pub fn all_products(&self) -> OrderedStore<Product> {
        self.products.snapshot()
    }

    /// Run `f` over the live product sequence under the read lock.
    ///
    /// `f` sees the store itself, not a copy, but cannot change it. Do not call
    /// back into an inventory or ledger mutation from inside `f`.
    pub fn with_products<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&OrderedStore<Product>) -> R,
    {
        self.products.read(f)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run `f` on the product with `id` while holding the write lock.
    ///
    /// This is the only path for in-place field mutation outside the store's
    /// own operations; the sale ledger uses it to check and decrement stock
    /// atomically. Fails with `NotFound` for an unknown id.
    pub fn with_product_mut<R, F>(&self, id: &str, f: F) -> DomainResult<R>
    where
        F: FnOnce(&mut Product) -> DomainResult<R>,
    {
        self.products.write(|products| {
            let product = products
                .find_by_id_mut(id)
                .ok_or_else(|| DomainError::not_found(id))?;
            f(product)
        })
    }
}
