//! Shopping cart module.
//!
//! Contains the cart ledger, its lines, and pricing against the catalog.

mod ledger;
mod pricing;

pub use ledger::{CartLedger, CartLine, CartState, QuantityChange, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartPricing, LinePricing};
