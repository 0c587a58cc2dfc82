//! Search-box filtering of the catalog.

use crate::catalog::Product;

/// Case-insensitive substring match against a product's name.
///
/// Descriptions and categories are not searched. An empty term matches
/// every product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.name.to_lowercase().contains(&self.needle)
    }

    /// Keep matching products, preserving catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter `products` by the search-box `term`.
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    NameFilter::new(term)
        .apply(products)
        .into_iter()
        .cloned()
        .collect()
}
