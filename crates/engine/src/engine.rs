//! The catalog & cart state engine.
//!
//! [`StoreEngine`] owns the catalog, the transient view state, the cart, and
//! the cart's persisted copy. It is single-threaded and driven entirely by
//! user intents from the rendering layer; there are no background writers.
//!
//! Persistence is fire-and-forget: a failed write is logged and browsing
//! continues, since losing the persisted copy only resets the cart to empty
//! on the next load.

use fresh_basket_core::{Price, ProductId};

use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogOrder, CategoryFilter, paginate, total_pages};
use crate::order::{CustomerDetails, Order, OrderError, PaymentMethod};
use crate::storage::{KeyValueStore, clear_cart, load_cart, save_cart};
use crate::view::{CartView, CatalogPage, ViewState};

/// A cart change pushed to subscribed observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A unit of a product was added; `qty` is the line's new quantity.
    LineAdded { id: ProductId, qty: u32 },
    /// A line's quantity was set directly.
    QuantityChanged { id: ProductId, qty: u32 },
    /// A line was removed entirely.
    LineRemoved { id: ProductId },
    /// The cart was emptied.
    Cleared,
    /// A demo order was placed (which also empties the cart).
    OrderPlaced { order_id: uuid::Uuid },
}

/// Update contract between the engine and the view layer.
///
/// Observers are notified after every cart mutation, once the new state has
/// been persisted.
pub trait CartObserver {
    /// Called with the event and the cart as it is after the mutation.
    fn cart_updated(&self, event: &CartEvent, cart: &Cart);
}

/// The state engine behind the demo storefront.
///
/// Construction loads the persisted cart before anything else, so the first
/// render already sees the restored state.
pub struct StoreEngine<S: KeyValueStore> {
    catalog: Catalog,
    view: ViewState,
    cart: Cart,
    store: S,
    catalog_order: CatalogOrder,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> StoreEngine<S> {
    /// Create an engine over a catalog and a cart store.
    ///
    /// Restores the persisted cart; an absent or malformed value yields an
    /// empty cart.
    #[must_use]
    pub fn new(catalog: Catalog, store: S) -> Self {
        let cart = load_cart(&store);
        Self {
            catalog,
            view: ViewState::default(),
            cart,
            store,
            catalog_order: CatalogOrder::default(),
            observers: Vec::new(),
        }
    }

    /// Use a non-default view state (e.g., a different page size).
    #[must_use]
    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    /// Ordering for the unfiltered catalog view; deterministic by default.
    #[must_use]
    pub const fn with_catalog_order(mut self, order: CatalogOrder) -> Self {
        self.catalog_order = order;
        self
    }

    /// Register an observer for cart updates.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The read-only catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current browsing state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// The cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of `price * qty` over the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Cart snapshot for the rendering layer.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    // -------------------------------------------------------------------
    // Browsing intents
    // -------------------------------------------------------------------

    /// Switch the category filter. Resets to page 1.
    pub const fn select_category(&mut self, filter: CategoryFilter) {
        self.view.select_filter(filter);
    }

    /// Jump to a page of the current filtered view, clamped to range.
    pub fn set_page(&mut self, page: usize) {
        let pages = self.current_total_pages();
        self.view.set_page(page, pages);
    }

    /// Advance one page, clamped to the last page.
    pub fn next_page(&mut self) {
        let pages = self.current_total_pages();
        self.view.next_page(pages);
    }

    /// Go back one page, clamped to page 1.
    pub const fn prev_page(&mut self) {
        self.view.prev_page();
    }

    /// The page of products for the current filter and page number.
    #[must_use]
    pub fn current_page(&self) -> CatalogPage {
        let filtered = self
            .catalog
            .filter_ordered(self.view.filter(), self.catalog_order);
        let pages = total_pages(filtered.len(), self.view.page_size());
        let products = paginate(&filtered, self.view.page_size(), self.view.page()).to_vec();
        CatalogPage {
            products,
            page: self.view.page(),
            total_pages: pages,
        }
    }

    fn current_total_pages(&self) -> usize {
        let count = self.catalog.filter(self.view.filter()).len();
        total_pages(count, self.view.page_size())
    }

    // -------------------------------------------------------------------
    // Cart intents
    // -------------------------------------------------------------------

    /// Add one unit of a catalog product to the cart.
    ///
    /// Unknown product ids are ignored. Returns `true` if the cart changed.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.get(id).cloned() else {
            tracing::warn!("Ignoring add_to_cart for unknown product {id}");
            return false;
        };
        let qty = self.cart.add(&product);
        self.persist();
        self.notify(&CartEvent::LineAdded { id, qty });
        true
    }

    /// Remove a product's line from the cart entirely.
    ///
    /// A missing line is a no-op. Returns `true` if the cart changed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        if self.cart.remove(id).is_none() {
            return false;
        }
        self.persist();
        self.notify(&CartEvent::LineRemoved { id });
        true
    }

    /// Set a line's quantity; 0 removes the line.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, id: ProductId, qty: u32) -> bool {
        if !self.cart.set_quantity(id, qty) {
            return false;
        }
        self.persist();
        let event = if qty == 0 {
            CartEvent::LineRemoved { id }
        } else {
            CartEvent::QuantityChanged { id, qty }
        };
        self.notify(&event);
        true
    }

    // -------------------------------------------------------------------
    // Checkout intent
    // -------------------------------------------------------------------

    /// Place the demo order: snapshot the cart into a receipt, then clear
    /// the cart and its persisted copy.
    ///
    /// No settlement happens; the receipt is only logged and returned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if there is nothing to order.
    pub fn confirm_order(
        &mut self,
        customer: CustomerDetails,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrderError> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order = Order::new(
            customer,
            payment_method,
            self.cart.lines().to_vec(),
            self.cart.total(),
        );
        tracing::info!(
            order_id = %order.id,
            total = %order.total.display(),
            lines = order.lines.len(),
            "Demo order placed (no real payment)"
        );

        self.cart.clear();
        if let Err(e) = clear_cart(&mut self.store) {
            tracing::error!("Failed to clear persisted cart: {e}");
        }
        self.notify(&CartEvent::OrderPlaced { order_id: order.id });

        Ok(order)
    }

    // -------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------

    /// Write the cart through to the store, fire-and-forget.
    fn persist(&mut self) {
        if let Err(e) = save_cart(&mut self.store, &self.cart) {
            tracing::error!("Failed to persist cart: {e}");
        }
    }

    fn notify(&self, event: &CartEvent) {
        for observer in &self.observers {
            observer.cart_updated(event, &self.cart);
        }
    }
}
