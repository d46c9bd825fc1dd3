//! Catalog sources for the storefront engine.
//!
//! Every source here implements [`storefront_commerce::CatalogSource`] and
//! funnels its bytes through [`decode_catalog`], so a catalog served over
//! HTTP and one read from disk are validated the same way.
//!
//! ```rust,no_run
//! use storefront_commerce::CatalogSource;
//! use storefront_source::HttpCatalogSource;
//!
//! # async fn demo() -> Result<(), storefront_commerce::SourceError> {
//! let source = HttpCatalogSource::default();
//! let products = source.fetch_products().await?;
//! println!("{} products from {}", products.len(), source.describe());
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod http;
pub mod record;

pub use file::FileCatalogSource;
pub use http::{HttpCatalogSource, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT};
pub use record::{decode_catalog, ProductRecord};
pub use storefront_commerce::{CatalogSource, SourceError};
