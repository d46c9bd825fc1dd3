//! Catalog rows and category options.

use crate::catalog::{category_label, CatalogState, Product, ALL_CATEGORIES};
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// One product as the presentation layer renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogRow {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_ref: String,
    pub price: Money,
    /// Formatted price, e.g. "$109.95".
    pub price_label: String,
}

impl From<&Product> for CatalogRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            image_ref: product.image_ref.clone(),
            price: product.price,
            price_label: product.price.display(),
        }
    }
}

/// An entry of the category selector.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value to send back with a category selection.
    pub value: String,
    /// Human label.
    pub label: String,
    /// Whether this is the active filter.
    pub selected: bool,
}

/// Rows for the displayed products (filtered, then sorted if a sort is active).
pub fn project_catalog(catalog: &CatalogState) -> Vec<CatalogRow> {
    catalog.displayed().iter().map(CatalogRow::from).collect()
}

/// Category selector entries: "all" first, then each category in first-seen order.
pub fn project_categories(catalog: &CatalogState) -> Vec<CategoryOption> {
    let active = catalog.filter().as_str();
    let mut options = vec![CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: category_label(ALL_CATEGORIES),
        selected: active == ALL_CATEGORIES,
    }];

    options.extend(catalog.categories().into_iter().map(|category| CategoryOption {
        label: category_label(&category),
        selected: active == category,
        value: category,
    }));
    options
}
