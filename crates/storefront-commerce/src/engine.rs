//! The storefront engine: one catalog, one cart, owned together.

use crate::cart::{CartLedger, QuantityChange};
use crate::catalog::{CatalogStore, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::view::Projection;

/// Engine instance owning the catalog and cart state of one session.
///
/// All mutation goes through `&mut self`; the presentation layer only
/// ever sees [`Projection`]s.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartLedger,
}

impl Storefront {
    /// Create an engine with an empty catalog and an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Replace the catalog. The cart is kept; lines for products that
    /// disappeared become orphans.
    pub fn load(&mut self, products: Vec<Product>) {
        self.catalog.load(products);
    }

    pub fn filter_by_category(&mut self, category: &str) -> &[Product] {
        self.catalog.filter_by_category(category)
    }

    pub fn sort_by_price(&mut self, order: &str) -> Vec<Product> {
        self.catalog.sort_by_price(order)
    }

    pub fn add_item(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        self.cart.add_item(product_id, self.catalog.state())
    }

    pub fn increase_quantity(
        &mut self,
        product_id: ProductId,
    ) -> Result<QuantityChange, CommerceError> {
        self.cart.increase_quantity(product_id)
    }

    pub fn decrease_quantity(&mut self, product_id: ProductId) -> QuantityChange {
        self.cart.decrease_quantity(product_id)
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        self.cart.remove_item(product_id)
    }

    pub fn compute_total(&self) -> Money {
        self.cart.compute_total(self.catalog.state())
    }

    /// Current catalog and cart views.
    pub fn project(&self) -> Projection {
        Projection::of(self.catalog.state(), self.cart.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_engine() {
        let mut engine = Storefront::new();
        assert!(engine.filter_by_category("all").is_empty());
        assert!(engine.sort_by_price("asc").is_empty());
        assert_eq!(
            engine.add_item(ProductId::new(1)),
            Err(CommerceError::ProductNotFound(ProductId::new(1)))
        );
        assert!(engine.compute_total().is_zero());

        let projection = engine.project();
        assert!(projection.catalog.is_empty());
        assert!(projection.cart.is_empty());
    }

    #[test]
    fn test_reload_keeps_cart() {
        let mut engine = Storefront::new();
        engine.load(vec![Product::new(1, "A", "x", Money::new(1000)).unwrap()]);
        engine.add_item(ProductId::new(1)).unwrap();

        engine.load(vec![Product::new(1, "A", "x", Money::new(1500)).unwrap()]);
        assert_eq!(engine.cart().state().quantity_of(ProductId::new(1)), 1);
        assert_eq!(engine.compute_total(), Money::new(1500));
    }
}
