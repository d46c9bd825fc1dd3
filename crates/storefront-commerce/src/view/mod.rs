//! View projection module.
//!
//! Pure functions turning engine state into plain, serializable data for
//! the presentation layer. Nothing here keeps state of its own; every view
//! can be recomputed at any time.

mod cart;
mod catalog;

pub use cart::{project_cart, CartLineView, CartView};
pub use catalog::{project_catalog, project_categories, CatalogRow, CategoryOption};

use crate::cart::CartState;
use crate::catalog::CatalogState;
use serde::Serialize;

/// Both views, taken at the same moment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Projection {
    pub catalog: Vec<CatalogRow>,
    pub cart: CartView,
}

impl Projection {
    /// Project catalog and cart together.
    pub fn of(catalog: &CatalogState, cart: &CartState) -> Self {
        Self {
            catalog: project_catalog(catalog),
            cart: project_cart(cart, catalog),
        }
    }
}
