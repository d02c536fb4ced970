//! Shopping cart and cart line types.
//!
//! The cart is an insertion-ordered sequence of lines, one per distinct
//! product id. Two invariants hold at all times:
//!
//! - no two lines share a product id;
//! - every line has `qty >= 1` (a line whose quantity drops to zero is
//!   removed, never retained).

use serde::{Deserialize, Serialize};

use fresh_basket_core::{CurrencyCode, Price, Product, ProductId};

/// One product's entry in the cart, carrying its quantity.
///
/// Serializes to the persisted format `{id, name, category, price, image,
/// qty}`: the product fields are flattened into the line object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub qty: u32,
}

impl CartLine {
    /// A fresh line for a product, quantity 1.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    /// The product id this line belongs to.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.qty
    }
}

/// The user's in-progress selection of products with quantities.
///
/// Line order is the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line's quantity, or appends a new line with
    /// quantity 1. Returns the line's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == product.id) {
            line.qty += 1;
            return line.qty;
        }
        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Remove the line for a product id entirely.
    ///
    /// Returns the removed line, or `None` if no line matched (a no-op, not
    /// an error).
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(pos))
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 removes the line. Unknown ids are a no-op. Returns
    /// `true` if the cart changed.
    pub fn set_quantity(&mut self, id: ProductId, qty: u32) -> bool {
        if qty == 0 {
            return self.remove(id).is_some();
        }
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) if line.qty != qty => {
                line.qty = qty;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * qty` over all lines. Pure, no side effects.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| {
                line.product.price.currency_code
            });
        self.lines
            .iter()
            .fold(Price::zero(currency), |acc, line| acc + line.line_total())
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fresh_basket_core::Category;
    use rust_decimal::Decimal;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            Category::Fruit,
            Price::from_units(price, CurrencyCode::INR),
            format!("https://example.com/{id}.jpg"),
        )
    }

    #[test]
    fn test_double_add_merges_into_one_line() {
        let apple = product(1, "Apple", 50);
        let mut cart = Cart::new();
        cart.add(&apple);
        cart.add(&apple);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(apple.id).unwrap().qty, 2);
        assert_eq!(cart.total().amount, Decimal::from(100));
    }

    #[test]
    fn test_insertion_order_is_first_add_order() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Banana", 30));
        cart.add(&product(1, "Apple", 50));
        cart.add(&product(2, "Banana", 30));

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.id().as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let apple = product(1, "Apple", 50);
        let mut cart = Cart::new();
        cart.add(&apple);
        cart.add(&apple);

        let removed = cart.remove(apple.id).unwrap();
        assert_eq!(removed.qty, 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total().amount, Decimal::ZERO);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apple", 50));
        assert!(cart.remove(ProductId::new(99)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let apple = product(1, "Apple", 50);
        let mut cart = Cart::new();
        cart.add(&apple);

        assert!(cart.set_quantity(apple.id, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_updates_line() {
        let apple = product(1, "Apple", 50);
        let mut cart = Cart::new();
        cart.add(&apple);

        assert!(cart.set_quantity(apple.id, 5));
        assert_eq!(cart.get(apple.id).unwrap().qty, 5);
        assert_eq!(cart.total().amount, Decimal::from(250));

        // Same quantity again reports no change
        assert!(!cart.set_quantity(apple.id, 5));
        // Unknown id is a no-op
        assert!(!cart.set_quantity(ProductId::new(99), 3));
    }

    #[test]
    fn test_total_is_additive() {
        let apple = product(1, "Apple", 50);
        let banana = product(2, "Banana", 30);
        let mut cart = Cart::new();

        let before = cart.total().amount;
        cart.add(&apple);
        assert_eq!(cart.total().amount, before + Decimal::from(50));

        cart.add(&banana);
        cart.add(&banana);
        assert_eq!(cart.total().amount, Decimal::from(50 + 60));

        cart.remove(banana.id);
        assert_eq!(cart.total().amount, Decimal::from(50));
    }

    #[test]
    fn test_serde_roundtrip_preserves_ids_qtys_and_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, "Mango", 120));
        cart.add(&product(1, "Apple", 50));
        cart.add(&product(1, "Apple", 50));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_line_json_is_flat() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apple", 50));

        let value = serde_json::to_value(&cart).unwrap();
        let line = &value[0];
        assert_eq!(line["id"], 1);
        assert_eq!(line["name"], "Apple");
        assert_eq!(line["category"], "Fruit");
        assert_eq!(line["qty"], 1);
        assert!(line.get("product").is_none());
    }
}
