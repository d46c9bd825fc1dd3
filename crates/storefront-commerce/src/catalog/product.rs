//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded; a reload replaces them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Category name, compared exactly.
    pub category: String,
    /// Unit price (never negative).
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Image URL or path.
    pub image_ref: String,
}

impl Product {
    /// Create a new product with an empty description and image.
    ///
    /// Returns an error if the price is negative.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Result<Self, CommerceError> {
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.display()));
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            price,
            description: String::new(),
            image_ref: String::new(),
        })
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Check if this product belongs to the given category (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
