//! Fresh Basket Engine - the catalog & cart state engine.
//!
//! This crate owns the demo storefront's state: the read-only product
//! catalog, the active category filter and page, and the shopping cart with
//! its persisted copy. The rendering layer is out of scope; it consumes the
//! snapshot types from [`view`] and feeds user intents (select category,
//! change page, add/remove item, submit order) into [`StoreEngine`].
//!
//! # Modules
//!
//! - [`catalog`] - Read-only catalog, category filtering, pagination
//! - [`cart`] - Cart and cart line types with their invariants
//! - [`storage`] - Key-value persistence for the cart
//! - [`view`] - Transient view state and presentation snapshots
//! - [`order`] - Demo checkout types (no real settlement)
//! - [`engine`] - The [`StoreEngine`] tying everything together
//! - [`data`] - The built-in demo catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod data;
pub mod engine;
pub mod order;
pub mod storage;
pub mod view;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogOrder, CategoryFilter, paginate, total_pages};
pub use engine::{CartEvent, CartObserver, StoreEngine};
pub use order::{CustomerDetails, Order, OrderError, PaymentMethod};
pub use storage::{CART_STORAGE_KEY, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use view::{CartLineView, CartView, CatalogPage, DEFAULT_PAGE_SIZE, ViewState};
