//! Wire format of the remote product catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::Product;
use storefront_commerce::{Money, ProductId, SourceError};

/// A product as the catalog API sends it.
///
/// Extra fields (ratings and the like) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    /// Decimal price, e.g. `109.95`.
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl ProductRecord {
    /// Validate and convert into a catalog product.
    pub fn into_product(self) -> Result<Product, SourceError> {
        let invalid = |reason: String| SourceError::InvalidRecord {
            id: self.id,
            reason,
        };

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid(format!("price {} is not a non-negative number", self.price)));
        }
        let price = Money::from_decimal(self.price).map_err(|e| invalid(e.to_string()))?;

        let product = Product::new(ProductId::new(self.id), self.title, self.category, price)
            .map_err(|e| SourceError::InvalidRecord {
                id: self.id,
                reason: e.to_string(),
            })?;
        Ok(product
            .with_description(self.description)
            .with_image(self.image))
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            title: product.title.clone(),
            price: product.price.to_decimal(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image_ref.clone(),
        }
    }
}

/// Decode a JSON array of product records into a validated catalog.
///
/// The whole payload is rejected if any record is invalid or if an id
/// appears twice.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<Product>, SourceError> {
    let records: Vec<ProductRecord> =
        serde_json::from_slice(bytes).map_err(|e| SourceError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SourceError::DuplicateProduct(record.id));
        }
        products.push(record.into_product()?);
    }
    Ok(products)
}
