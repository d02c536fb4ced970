//! Transient view state and presentation-boundary snapshots.
//!
//! [`ViewState`] tracks the active category filter and page; it is never
//! persisted. The snapshot types ([`CatalogPage`], [`CartView`]) are what the
//! rendering layer consumes; prices arrive pre-formatted.

use std::num::NonZeroUsize;

use fresh_basket_core::{Category, Product, ProductId};

use crate::cart::{Cart, CartLine};
use crate::catalog::CategoryFilter;

/// Products shown per page in the demo grid.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// The transient browsing state: active filter and current page.
///
/// The page resets to 1 whenever the filter changes, and is always within
/// `[1, total_pages]` for the current filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    filter: CategoryFilter,
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for ViewState {
    /// The demo opens on the Fruit view, page 1.
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// A fresh view state with the given page size.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            filter: CategoryFilter::Only(Category::Fruit),
            page: 1,
            page_size,
        }
    }

    /// The active category filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Products shown per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Switch the category filter, resetting to page 1.
    pub const fn select_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Advance one page, clamped to the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        self.set_page(self.page.saturating_add(1), total_pages);
    }

    /// Go back one page, clamped to page 1.
    pub const fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// One page of the filtered catalog, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub page: usize,
    pub total_pages: usize,
}

/// Cart line display data for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub qty: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "₹0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id(),
            name: line.product.name.clone(),
            qty: line.qty,
            price: line.product.price.display(),
            line_price: line.line_total().display(),
            image: line.product.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.total().display(),
            // The demo badge counts distinct lines, not units.
            item_count: u32::try_from(cart.len()).unwrap_or(u32::MAX),
        }
    }
}
