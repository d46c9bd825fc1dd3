//! Catalog store: the loaded product set and the current view over it.

use crate::catalog::{unique_categories, CategoryFilter, PriceOrder, Product};
use crate::ids::ProductId;
use serde::Serialize;

/// Catalog data plus the active view selection.
///
/// `visible` is always `all` restricted by `filter`. The active `sort`
/// applies to what gets displayed, never to `visible` itself, so
/// re-filtering always starts from catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    all: Vec<Product>,
    visible: Vec<Product>,
    filter: CategoryFilter,
    sort: Option<PriceOrder>,
}

impl CatalogState {
    /// Every loaded product, in source order.
    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// The filtered products, in source order.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// The visible products with the active sort applied.
    pub fn displayed(&self) -> Vec<Product> {
        match self.sort {
            Some(order) => order.sorted(&self.visible),
            None => self.visible.clone(),
        }
    }

    /// The active category filter.
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The active price order, if any.
    pub fn sort(&self) -> Option<PriceOrder> {
        self.sort
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.all.iter().find(|p| p.id == id)
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        unique_categories(&self.all)
    }

    /// Number of loaded products.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Check if no catalog has been loaded (or the load was empty).
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Owns the [`CatalogState`] and applies filter/sort selections to it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    /// Create an empty store. Every operation works on an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Replace the catalog wholesale and reset the view.
    ///
    /// IDs are expected to be unique; if a duplicate slips through, the
    /// first occurrence is kept.
    pub fn load(&mut self, products: Vec<Product>) {
        let mut all: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if all.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "duplicate product id in catalog load, keeping first");
                continue;
            }
            all.push(product);
        }

        tracing::info!(products = all.len(), "catalog loaded");
        self.state = CatalogState {
            visible: all.clone(),
            all,
            filter: CategoryFilter::All,
            sort: None,
        };
    }

    /// Filter by a category selector value (`"all"` or an exact category name).
    ///
    /// An unknown category leaves nothing visible.
    pub fn filter_by_category(&mut self, category: &str) -> &[Product] {
        self.apply_filter(CategoryFilter::parse(category))
    }

    /// Apply a typed category filter. Clears the active sort.
    pub fn apply_filter(&mut self, filter: CategoryFilter) -> &[Product] {
        self.state.visible = self
            .state
            .all
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        self.state.filter = filter;
        self.state.sort = None;
        &self.state.visible
    }

    /// Sort the visible products by a selector value (`"asc"` or `"desc"`).
    ///
    /// Any other value drops the active sort and returns `visible` as is.
    pub fn sort_by_price(&mut self, order: &str) -> Vec<Product> {
        match PriceOrder::parse(order) {
            Some(order) => self.apply_sort(order),
            None => {
                self.state.sort = None;
                self.state.visible.clone()
            }
        }
    }

    /// Apply a typed price order to the displayed list.
    pub fn apply_sort(&mut self, order: PriceOrder) -> Vec<Product> {
        self.state.sort = Some(order);
        self.state.displayed()
    }

    /// Every loaded product, in source order.
    pub fn all(&self) -> &[Product] {
        self.state.all()
    }

    /// The filtered products, in source order.
    pub fn visible(&self) -> &[Product] {
        self.state.visible()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.state.get(id)
    }
}
