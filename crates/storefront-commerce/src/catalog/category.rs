//! Category selection for the catalog view.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The category selector value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// A category filter chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show only products in this exact category.
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value. `"all"` means no filter; anything else is a
    /// category name taken verbatim.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.in_category(category),
        }
    }

    /// The selector value for this filter.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Unique categories in first-seen order.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Display label for a category: first character upper-cased.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u64, category: &str) -> Product {
        Product::new(id, format!("p{}", id), category, Money::new(100)).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("electronics"),
            CategoryFilter::Only("electronics".to_string())
        );
        // Case-sensitive: only the exact lowercase word means "all".
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Only("All".to_string())
        );
    }

    #[test]
    fn test_unique_categories_first_seen_order() {
        let products = vec![
            product(1, "electronics"),
            product(2, "jewelery"),
            product(3, "electronics"),
            product(4, "men's clothing"),
        ];
        assert_eq!(
            unique_categories(&products),
            vec!["electronics", "jewelery", "men's clothing"]
        );
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("men's clothing"), "Men's clothing");
        assert_eq!(category_label("électronique"), "Électronique");
        assert_eq!(category_label(""), "");
    }
}
