//! Read-only product catalog with category filtering and pagination.

use std::num::NonZeroUsize;
use std::sync::Arc;

use rand::seq::SliceRandom;

use fresh_basket_core::{Category, Product, ProductId};

/// The criterion used to narrow the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering; every product is shown.
    All,
    /// Only products of the given category.
    Only(Category),
}

/// Ordering applied to the unfiltered catalog view.
///
/// Shuffling the "all categories" view is purely cosmetic, so the engine
/// defaults to the deterministic insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogOrder {
    #[default]
    Insertion,
    Shuffled,
}

/// The static, read-only set of purchasable products.
///
/// Loaded once at startup and shared cheaply; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Create a catalog from a static product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty. An empty catalog is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching the filter, in insertion order.
    ///
    /// Returns exactly the subset whose category equals the filter, or the
    /// full catalog for [`CategoryFilter::All`]. An empty result is valid.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => p.category == category,
            })
            .cloned()
            .collect()
    }

    /// Like [`Self::filter`], but the unfiltered view may be shuffled.
    ///
    /// Filtered views always keep insertion order; shuffling only ever
    /// applies to [`CategoryFilter::All`].
    #[must_use]
    pub fn filter_ordered(&self, filter: CategoryFilter, order: CatalogOrder) -> Vec<Product> {
        let mut products = self.filter(filter);
        if filter == CategoryFilter::All && order == CatalogOrder::Shuffled {
            products.shuffle(&mut rand::rng());
        }
        products
    }
}

/// Slice out one page of items.
///
/// Pages are 1-based: page `n` covers `[(n-1)*size, n*size)`, clamped to the
/// available items. Page 0 and out-of-range pages yield an empty slice;
/// callers guard with [`total_pages`].
#[must_use]
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Number of pages needed for `len` items, minimum 1.
#[must_use]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}
