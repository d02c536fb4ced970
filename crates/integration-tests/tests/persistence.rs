//! Cart persistence across engine instances.

use fresh_basket_engine::data::demo_catalog;
use fresh_basket_engine::{
    CART_STORAGE_KEY, Catalog, FileStore, KeyValueStore, MemoryStore, StoreEngine,
};

#[test]
fn cart_survives_engine_restart_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = Catalog::new(demo_catalog());

    let ids: Vec<_> = catalog.products().iter().take(3).map(|p| p.id).collect();
    {
        let store = FileStore::new(dir.path()).expect("store");
        let mut engine = StoreEngine::new(catalog.clone(), store);
        for &id in &ids {
            engine.add_to_cart(id);
        }
        engine.add_to_cart(ids[0]);
    }

    // "Load persisted cart before first render": a new engine over the same
    // directory starts from the saved state.
    let store = FileStore::new(dir.path()).expect("store");
    let engine = StoreEngine::new(catalog, store);

    let restored: Vec<_> = engine.cart().lines().iter().map(CartLineKey::from).collect();
    assert_eq!(
        restored,
        vec![
            CartLineKey { id: ids[0].as_i32(), qty: 2 },
            CartLineKey { id: ids[1].as_i32(), qty: 1 },
            CartLineKey { id: ids[2].as_i32(), qty: 1 },
        ]
    );
}

#[derive(Debug, PartialEq, Eq)]
struct CartLineKey {
    id: i32,
    qty: u32,
}

impl From<&fresh_basket_engine::CartLine> for CartLineKey {
    fn from(line: &fresh_basket_engine::CartLine) -> Self {
        Self {
            id: line.id().as_i32(),
            qty: line.qty,
        }
    }
}

#[test]
fn malformed_persisted_cart_resets_to_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path()).expect("store");
    store
        .set(CART_STORAGE_KEY, "this is not a cart")
        .expect("write");

    let engine = StoreEngine::new(Catalog::new(demo_catalog()), store);
    assert!(engine.cart().is_empty());
}

#[test]
fn persisted_value_is_a_json_array_of_flat_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut engine = StoreEngine::new(
        Catalog::new(demo_catalog()),
        FileStore::new(dir.path()).expect("store"),
    );
    let id = engine.catalog().products().first().expect("catalog").id;
    engine.add_to_cart(id);

    let raw = std::fs::read_to_string(dir.path().join(format!("{CART_STORAGE_KEY}.json")))
        .expect("persisted file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let lines = value.as_array().expect("array");
    assert_eq!(lines.len(), 1);

    let line = &lines[0];
    for field in ["id", "name", "category", "price", "image", "qty"] {
        assert!(line.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn memory_store_round_trips_through_the_cart_codec() {
    let mut engine = StoreEngine::new(Catalog::new(demo_catalog()), MemoryStore::new());
    let id = engine.catalog().products().first().expect("catalog").id;
    engine.add_to_cart(id);

    let json = serde_json::to_string(engine.cart()).expect("serialize");
    let restored: fresh_basket_engine::Cart = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(&restored, engine.cart());
}
