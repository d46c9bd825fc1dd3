//! Price ordering for the catalog view.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort direction for prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceOrder {
    /// Sort by price, low to high.
    Ascending,
    /// Sort by price, high to low.
    Descending,
}

impl PriceOrder {
    /// Parse a sort selector value (`"asc"` or `"desc"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(PriceOrder::Ascending),
            "desc" => Some(PriceOrder::Descending),
            _ => None,
        }
    }

    /// The selector value for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceOrder::Ascending => "asc",
            PriceOrder::Descending => "desc",
        }
    }

    /// Label for the sort selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            PriceOrder::Ascending => "Price: Low to High",
            PriceOrder::Descending => "Price: High to Low",
        }
    }

    /// Return a sorted copy. Equal prices keep their relative order.
    pub fn sorted(&self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        match self {
            PriceOrder::Ascending => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
            PriceOrder::Descending => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        sorted
    }
}
