//! Cart pricing calculations.
//!
//! Prices are looked up in the catalog every time; nothing here is cached.

use crate::cart::CartState;
use crate::catalog::CatalogState;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for a cart against a catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Lines that resolved, in cart order.
    pub lines: Vec<LinePricing>,
    /// Lines whose product is missing from the catalog.
    pub orphaned: Vec<ProductId>,
    /// Sum of resolved line subtotals.
    pub total: Money,
}

impl CartPricing {
    /// Price every line of `cart` against `catalog`.
    pub fn price(cart: &CartState, catalog: &CatalogState) -> Self {
        let mut lines = Vec::with_capacity(cart.lines().len());
        let mut orphaned = Vec::new();

        for line in cart.lines() {
            match catalog.get(line.product_id) {
                Some(product) => lines.push(LinePricing {
                    product_id: line.product_id,
                    unit_price: product.price,
                    quantity: line.quantity,
                    subtotal: product.price.times(line.quantity),
                }),
                None => orphaned.push(line.product_id),
            }
        }

        let total = Money::sum(lines.iter().map(|l| l.subtotal));
        Self {
            lines,
            orphaned,
            total,
        }
    }

    /// Check if any line failed to resolve.
    pub fn has_orphans(&self) -> bool {
        !self.orphaned.is_empty()
    }
}

/// Pricing for a single resolved line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LinePricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity.
    pub subtotal: Money,
}
