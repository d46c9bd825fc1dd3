//! Catalog read from a JSON file on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use storefront_commerce::catalog::Product;
use storefront_commerce::{CatalogSource, SourceError};

use crate::record::decode_catalog;

/// Reads the catalog from a local file in the same format the HTTP API serves.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        decode_catalog(&bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::ProductId;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/products.json")
    }

    #[tokio::test]
    async fn test_reads_fixture() {
        let source = FileCatalogSource::new(fixture());
        let products = source.fetch_products().await.unwrap();
        assert!(!products.is_empty());
        assert_eq!(products[0].id, ProductId::new(1));
        assert!(source.describe().starts_with("file "));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = FileCatalogSource::new("/definitely/not/here/products.json");
        let err = source.fetch_products().await.unwrap_err();
        assert!(matches!(err, SourceError::Io(msg) if msg.contains("products.json")));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let path = std::env::temp_dir().join(format!(
            "storefront-malformed-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, b"not json").await.unwrap();

        let err = FileCatalogSource::new(&path).fetch_products().await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
