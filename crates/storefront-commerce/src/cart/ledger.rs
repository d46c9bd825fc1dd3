//! Cart ledger and line types.

use crate::cart::CartPricing;
use crate::catalog::CatalogState;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// One product-quantity pairing in the cart.
///
/// `quantity` is at least 1 for as long as the line exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased (resolved against the catalog on read).
    pub product_id: ProductId,
    /// Quantity.
    pub quantity: u32,
}

/// Cart contents in insertion order, at most one line per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Quantity held for a product (0 when absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What a quantity command did to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuantityChange {
    /// The line now holds this quantity.
    Set(u32),
    /// The line was deleted.
    Removed,
    /// No line for that product; nothing happened.
    Absent,
}

/// Owns the [`CartState`] and enforces the line invariants.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    state: CartState,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    /// Add one unit of a product.
    ///
    /// The product must exist in the catalog. An existing line is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Returns the line's new quantity.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        catalog: &CatalogState,
    ) -> Result<u32, CommerceError> {
        if catalog.get(product_id).is_none() {
            return Err(CommerceError::ProductNotFound(product_id));
        }

        if let Some(existing) = self.line_mut(product_id) {
            existing.quantity = increment(existing.quantity)?;
            return Ok(existing.quantity);
        }

        self.state.lines.push(CartLine {
            product_id,
            quantity: 1,
        });
        Ok(1)
    }

    /// Increment an existing line. Never creates a line.
    pub fn increase_quantity(
        &mut self,
        product_id: ProductId,
    ) -> Result<QuantityChange, CommerceError> {
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = increment(line.quantity)?;
                Ok(QuantityChange::Set(line.quantity))
            }
            None => Ok(QuantityChange::Absent),
        }
    }

    /// Decrement an existing line; a line at 1 is removed instead.
    pub fn decrease_quantity(&mut self, product_id: ProductId) -> QuantityChange {
        let Some(line) = self.line_mut(product_id) else {
            return QuantityChange::Absent;
        };
        if line.quantity > 1 {
            line.quantity -= 1;
            return QuantityChange::Set(line.quantity);
        }
        self.remove_item(product_id);
        QuantityChange::Removed
    }

    /// Remove a line regardless of quantity.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.state.lines.len();
        self.state.lines.retain(|l| l.product_id != product_id);
        self.state.lines.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.state.lines.clear();
    }

    /// Sum of quantity × price, priced against the current catalog.
    ///
    /// Lines whose product is gone from the catalog contribute nothing.
    pub fn compute_total(&self, catalog: &CatalogState) -> Money {
        CartPricing::price(&self.state, catalog).total
    }

    /// Lines whose product no longer resolves against the catalog.
    pub fn orphaned_lines(&self, catalog: &CatalogState) -> Vec<ProductId> {
        self.state
            .lines
            .iter()
            .filter(|l| catalog.get(l.product_id).is_none())
            .map(|l| l.product_id)
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.state
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
    }
}

fn increment(quantity: u32) -> Result<u32, CommerceError> {
    let next = u64::from(quantity) + 1;
    if next > u64::from(MAX_QUANTITY_PER_ITEM) {
        return Err(CommerceError::QuantityExceedsLimit(
            next,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(quantity + 1)
}
