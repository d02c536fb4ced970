//! Integration tests for Fresh Basket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fresh-basket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browsing` - Category filtering and pagination through the engine
//! - `persistence` - Cart persistence across engine instances
//! - `checkout` - The demo order flow end to end

#![cfg_attr(not(test), forbid(unsafe_code))]

use fresh_basket_engine::{Catalog, MemoryStore, StoreEngine, data::demo_catalog};

/// An engine over the demo catalog and a fresh in-memory store.
#[must_use]
pub fn demo_engine() -> StoreEngine<MemoryStore> {
    StoreEngine::new(Catalog::new(demo_catalog()), MemoryStore::new())
}
