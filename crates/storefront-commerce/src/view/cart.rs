//! Cart lines and totals as rendered.

use crate::cart::{CartPricing, CartState};
use crate::catalog::CatalogState;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// One resolved cart line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
    pub subtotal_label: String,
}

/// The cart as the presentation layer renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartView {
    /// Resolved lines in cart order. Orphaned lines are left out.
    pub lines: Vec<CartLineView>,
    /// Sum of the resolved subtotals.
    pub total: Money,
    /// e.g. "Total: $40.00".
    pub total_label: String,
    /// Sum of quantities over all lines, orphans included.
    pub item_count: u64,
    /// Lines whose product is missing from the catalog.
    pub orphaned: Vec<ProductId>,
}

impl CartView {
    /// Check if nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Resolve the cart against the catalog.
pub fn project_cart(cart: &CartState, catalog: &CatalogState) -> CartView {
    let pricing = CartPricing::price(cart, catalog);

    let lines = pricing
        .lines
        .iter()
        .filter_map(|line| {
            let product = catalog.get(line.product_id)?;
            Some(CartLineView {
                product_id: line.product_id,
                title: product.title.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal,
                subtotal_label: line.subtotal.display(),
            })
        })
        .collect();

    CartView {
        lines,
        total: pricing.total,
        total_label: format!("Total: {}", pricing.total.display()),
        item_count: cart.item_count(),
        orphaned: pricing.orphaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLedger;
    use crate::catalog::{CatalogStore, Product};

    #[test]
    fn test_project_cart_scenario() {
        let mut store = CatalogStore::new();
        store.load(vec![
            Product::new(1, "A", "x", Money::new(1000)).unwrap(),
            Product::new(2, "B", "x", Money::new(2000)).unwrap(),
        ]);
        let mut cart = CartLedger::new();
        cart.add_item(ProductId::new(1), store.state()).unwrap();
        cart.add_item(ProductId::new(2), store.state()).unwrap();
        cart.increase_quantity(ProductId::new(1)).unwrap();

        let view = project_cart(cart.state(), store.state());
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].title, "A");
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].subtotal_label, "$20.00");
        assert_eq!(view.total, Money::new(4000));
        assert_eq!(view.total_label, "Total: $40.00");
        assert_eq!(view.item_count, 3);
        assert!(view.orphaned.is_empty());
    }

    #[test]
    fn test_project_cart_hides_orphans() {
        let mut store = CatalogStore::new();
        store.load(vec![
            Product::new(1, "A", "x", Money::new(1000)).unwrap(),
            Product::new(2, "B", "x", Money::new(2000)).unwrap(),
        ]);
        let mut cart = CartLedger::new();
        cart.add_item(ProductId::new(1), store.state()).unwrap();
        cart.add_item(ProductId::new(2), store.state()).unwrap();

        store.load(vec![Product::new(2, "B", "x", Money::new(2500)).unwrap()]);
        let view = project_cart(cart.state(), store.state());
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].unit_price, Money::new(2500));
        assert_eq!(view.orphaned, vec![ProductId::new(1)]);
        assert_eq!(view.total_label, "Total: $25.00");
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn test_project_empty_cart() {
        let view = project_cart(&CartState::default(), &CatalogState::default());
        assert!(view.is_empty());
        assert_eq!(view.total_label, "Total: $0.00");
    }
}
