//! Catalog and cart state engine for the storefront.
//!
//! This crate holds everything with real rules in it:
//!
//! - **Catalog**: the loaded products, category filter, price sort
//! - **Cart**: lines with quantities, totals priced against the catalog
//! - **View**: plain data for the presentation layer to render
//! - **Dispatch**: typed commands applied in arrival order
//!
//! Fetching products is left to a [`CatalogSource`]; rendering is left to
//! whoever consumes [`view::Projection`].
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut shop = Storefront::new();
//! shop.load(vec![
//!     Product::new(1, "Backpack", "men's clothing", Money::new(1000)).unwrap(),
//!     Product::new(2, "Ring", "jewelery", Money::new(2000)).unwrap(),
//! ]);
//!
//! shop.add_item(ProductId::new(1)).unwrap();
//! shop.add_item(ProductId::new(2)).unwrap();
//! shop.increase_quantity(ProductId::new(1)).unwrap();
//!
//! assert_eq!(shop.compute_total().display(), "$40.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod dispatch;
pub mod engine;
pub mod source;
pub mod view;

pub use engine::Storefront;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use source::{CatalogSource, SourceError, StaticCatalogSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::engine::Storefront;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{CatalogState, CatalogStore, CategoryFilter, PriceOrder, Product};

    // Cart
    pub use crate::cart::{CartLedger, CartLine, CartState, QuantityChange};

    // View
    pub use crate::view::{project_cart, project_catalog, project_categories, Projection};

    // Dispatch
    pub use crate::dispatch::{Command, CommandDispatcher, Dispatched, Intent, Outcome};

    // Source
    pub use crate::source::{CatalogSource, SourceError, StaticCatalogSource};
}
