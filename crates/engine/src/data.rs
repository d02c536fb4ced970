//! The built-in demo catalog.
//!
//! The engine treats the catalog as external, read-only input; this module
//! is the static data source the demo storefront ships with.

use fresh_basket_core::{Category, CurrencyCode, Price, Product, ProductId};

fn product(id: i32, name: &str, category: Category, rupees: i64, image: &str) -> Product {
    Product::new(
        ProductId::new(id),
        name,
        category,
        Price::from_units(rupees, CurrencyCode::INR),
        image,
    )
}

/// The Fresh Basket demo product list: ten fruits and ten vegetables.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    use Category::{Fruit, Vegetable};

    vec![
        product(1, "Apple", Fruit, 50, "https://images.freshbasket.dev/fruits/apple.jpg"),
        product(2, "Banana", Fruit, 30, "https://images.freshbasket.dev/fruits/banana.jpg"),
        product(3, "Mango", Fruit, 120, "https://images.freshbasket.dev/fruits/mango.jpg"),
        product(4, "Orange", Fruit, 60, "https://images.freshbasket.dev/fruits/orange.jpg"),
        product(5, "Grapes", Fruit, 90, "https://images.freshbasket.dev/fruits/grapes.jpg"),
        product(6, "Pineapple", Fruit, 80, "https://images.freshbasket.dev/fruits/pineapple.jpg"),
        product(7, "Papaya", Fruit, 70, "https://images.freshbasket.dev/fruits/papaya.jpg"),
        product(8, "Strawberry", Fruit, 150, "https://images.freshbasket.dev/fruits/strawberry.jpg"),
        product(9, "Watermelon", Fruit, 65, "https://images.freshbasket.dev/fruits/watermelon.jpg"),
        product(10, "Pomegranate", Fruit, 110, "https://images.freshbasket.dev/fruits/pomegranate.jpg"),
        product(11, "Tomato", Vegetable, 40, "https://images.freshbasket.dev/vegetables/tomato.jpg"),
        product(12, "Potato", Vegetable, 25, "https://images.freshbasket.dev/vegetables/potato.jpg"),
        product(13, "Onion", Vegetable, 35, "https://images.freshbasket.dev/vegetables/onion.jpg"),
        product(14, "Carrot", Vegetable, 45, "https://images.freshbasket.dev/vegetables/carrot.jpg"),
        product(15, "Spinach", Vegetable, 20, "https://images.freshbasket.dev/vegetables/spinach.jpg"),
        product(16, "Cauliflower", Vegetable, 55, "https://images.freshbasket.dev/vegetables/cauliflower.jpg"),
        product(17, "Broccoli", Vegetable, 95, "https://images.freshbasket.dev/vegetables/broccoli.jpg"),
        product(18, "Capsicum", Vegetable, 60, "https://images.freshbasket.dev/vegetables/capsicum.jpg"),
        product(19, "Cucumber", Vegetable, 30, "https://images.freshbasket.dev/vegetables/cucumber.jpg"),
        product(20, "Brinjal", Vegetable, 38, "https://images.freshbasket.dev/vegetables/brinjal.jpg"),
    ]
}
