//! Product catalog module.
//!
//! Contains the product type, category and price selections, and the
//! store that applies them.

mod category;
mod product;
mod sort;
mod store;

pub use category::{category_label, unique_categories, CategoryFilter, ALL_CATEGORIES};
pub use product::Product;
pub use sort::PriceOrder;
pub use store::{CatalogState, CatalogStore};
