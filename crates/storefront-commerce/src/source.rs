//! Catalog source seam.
//!
//! The engine never fetches anything itself. A [`CatalogSource`] hands it
//! a validated product list; implementations live in `storefront-source`
//! apart from the in-memory one below.

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::Product;

/// Error type for catalog fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: u64, reason: String },

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u64),

    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Something that can supply the full product list.
///
/// A fetch either yields the whole catalog or fails; there are no partial
/// results and no retries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product.
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;

    /// Short human description (URL, path, ...) for logs.
    fn describe(&self) -> String;
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
    fail_with: Option<String>,
}

impl StaticCatalogSource {
    /// A source that always returns these products.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fail_with: None,
        }
    }

    /// A source whose every fetch fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }

    /// Replace the products returned by later fetches.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.fail_with = None;
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        match &self.fail_with {
            Some(reason) => Err(SourceError::Unavailable(reason.clone())),
            None => Ok(self.products.clone()),
        }
    }

    fn describe(&self) -> String {
        let count = self.products.len();
        format!("static ({} product{})", count, if count == 1 { "" } else { "s" })
    }
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        (**self).fetch_products().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
