//! Client-held cart state. Lines are keyed by (product id, size); the key,
//! not list position, decides whether an add merges or appends. The cart
//! lives in one client context only and is never shared across flows.

use crate::models::{CartLine, Product};

#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product` in `size`. An existing (product, size)
    /// line gains quantity instead of a duplicate line being appended.
    /// `size` is taken as offered; it is not checked against
    /// `product.sizes`.
    pub fn add_item(&mut self, product: &Product, size: i32) {
        if let Some(line) = self.find_mut(product.id, size) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            size,
            quantity: 1,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        });
    }

    /// Adjust a line's quantity by `delta`, flooring at 1. Reaching zero
    /// requires [`Cart::remove_item`]. Unknown keys are ignored.
    pub fn update_quantity(&mut self, product_id: i64, size: i32, delta: i32) {
        if let Some(line) = self.find_mut(product_id, size) {
            line.quantity = (line.quantity + delta).max(1);
        }
    }

    pub fn remove_item(&mut self, product_id: i64, size: i32) {
        self.lines
            .retain(|line| !(line.product_id == product_id && line.size == size));
    }

    /// Sum of price × quantity across all lines; excludes shipping.
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.price * i64::from(line.quantity))
            .sum()
    }

    /// Empty the cart. Called only after a confirmed checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn find_mut(&mut self, product_id: i64, size: i32) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id && line.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn adding_same_product_and_size_merges() {
        let product = catalog::get(1).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 32);
        cart.add_item(product, 32);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn different_sizes_are_separate_lines() {
        let product = catalog::get(1).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 32);
        cart.add_item(product, 34);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn decrement_floors_at_one() {
        let product = catalog::get(1).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 32);
        cart.update_quantity(product.id, 32, -1);
        cart.update_quantity(product.id, 32, -5);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn update_ignores_missing_line() {
        let mut cart = Cart::new();
        cart.update_quantity(1, 32, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn only_remove_deletes_a_line() {
        let product = catalog::get(2).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 30);
        cart.remove_item(product.id, 30);
        assert!(cart.is_empty());
        // removing again is a no-op
        cart.remove_item(product.id, 30);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let cream = catalog::get(1).unwrap();
        let black = catalog::get(2).unwrap();
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);
        cart.add_item(cream, 32);
        cart.add_item(cream, 32);
        cart.add_item(black, 34);
        assert_eq!(cart.total(), 1050 * 2 + 1050);
    }

    #[test]
    fn line_snapshots_product_fields() {
        let product = catalog::get(3).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 36);
        let line = &cart.lines()[0];
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.image, product.image);
    }

    #[test]
    fn clear_empties_the_cart() {
        let product = catalog::get(4).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 38);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
