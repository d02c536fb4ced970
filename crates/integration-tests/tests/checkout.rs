//! The demo order flow end to end.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use fresh_basket_core::Email;
use fresh_basket_engine::data::demo_catalog;
use fresh_basket_engine::{
    Cart, CartEvent, CartObserver, Catalog, CustomerDetails, FileStore, OrderError, PaymentMethod,
    StoreEngine,
};
use fresh_basket_integration_tests::demo_engine;

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Asha Rao".to_string(),
        email: Email::parse("asha@example.com").expect("email"),
        phone: "+91 98765 43210".to_string(),
        address: "12 Market Road, Pune".to_string(),
    }
}

#[test]
fn order_snapshots_cart_and_total_before_clearing() {
    let mut engine = demo_engine();
    let products: Vec<_> = engine.catalog().products().iter().take(2).cloned().collect();
    engine.add_to_cart(products[0].id);
    engine.add_to_cart(products[0].id);
    engine.add_to_cart(products[1].id);

    let expected_total = engine.total();
    let order = engine
        .confirm_order(customer(), PaymentMethod::CashOnDelivery)
        .expect("order");

    assert_eq!(order.total, expected_total);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].qty, 2);
    assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
    assert_eq!(order.customer.email.as_str(), "asha@example.com");

    assert!(engine.cart().is_empty());
    assert_eq!(engine.total().amount, Decimal::ZERO);
}

#[test]
fn order_clears_the_persisted_copy_too() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = Catalog::new(demo_catalog());

    let mut engine = StoreEngine::new(
        catalog.clone(),
        FileStore::new(dir.path()).expect("store"),
    );
    let id = engine.catalog().products().first().expect("catalog").id;
    engine.add_to_cart(id);
    engine.confirm_order(customer(), PaymentMethod::Card).expect("order");

    // A restart after checkout starts with an empty cart.
    let engine = StoreEngine::new(catalog, FileStore::new(dir.path()).expect("store"));
    assert!(engine.cart().is_empty());
}

#[test]
fn checkout_requires_a_non_empty_cart() {
    let mut engine = demo_engine();
    assert_eq!(
        engine.confirm_order(customer(), PaymentMethod::Wallet),
        Err(OrderError::EmptyCart)
    );
}

struct Recorder(Rc<RefCell<Vec<CartEvent>>>);

impl CartObserver for Recorder {
    fn cart_updated(&self, event: &CartEvent, _cart: &Cart) {
        self.0.borrow_mut().push(*event);
    }
}

#[test]
fn view_layer_is_told_when_an_order_empties_the_cart() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = demo_engine();
    engine.subscribe(Box::new(Recorder(Rc::clone(&events))));

    let id = engine.catalog().products().first().expect("catalog").id;
    engine.add_to_cart(id);
    let order = engine.confirm_order(customer(), PaymentMethod::Upi).expect("order");

    let seen = events.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], CartEvent::LineAdded { id, qty: 1 });
    assert_eq!(seen[1], CartEvent::OrderPlaced { order_id: order.id });
}
