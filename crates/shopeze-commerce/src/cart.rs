//! Cart and line item types.
//!
//! A cart holds at most one line per product id. Lines carry a
//! denormalized snapshot of the product's title/price/image taken at add
//! time, so later catalog changes never alter an existing cart.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product identifier.
    pub id: ProductId,
    /// Product title at time of add.
    pub title: String,
    /// Unit price at time of add.
    pub price: Money,
    /// Image reference at time of add.
    pub img: String,
    /// Quantity, always >= 1.
    pub qty: i64,
}

impl CartLine {
    /// Snapshot a product into a new line.
    pub fn from_product(product: &Product, qty: i64) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            img: product.img.clone(),
            qty,
        }
    }

    /// Line total (price × quantity) with checked arithmetic.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.qty)
            .ok_or(CommerceError::Overflow)
    }
}

/// The buyer's in-progress selection: an ordered sequence of lines.
///
/// Serializes as the bare line array, which is also the persisted
/// representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add a product to the cart, merging into an existing line.
    ///
    /// `qty` is clamped to >= 1. Returns the delta quantity actually
    /// added. At most one line per product id ever exists.
    pub fn add_or_increment(&mut self, product: &Product, qty: i64) -> i64 {
        let qty = qty.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.qty = line.qty.saturating_add(qty);
        } else {
            self.lines.push(CartLine::from_product(product, qty));
        }
        qty
    }

    /// Adjust a line's quantity by a signed delta, flooring at 1.
    ///
    /// Decrement never removes the line; removal is a separate explicit
    /// action. Returns false (no-op) when the line does not exist.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.qty = line.qty.saturating_add(delta).max(1);
                true
            }
            None => false,
        }
    }

    /// Remove a line entirely, returning it (with its pre-removal
    /// quantity) if it existed.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| &l.id == id)?;
        Some(self.lines.remove(pos))
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Sum of line totals with checked arithmetic.
    pub fn total_value(&self) -> Result<Money, CommerceError> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(totals.iter(), Currency::INR).ok_or(CommerceError::Overflow)
    }

    /// Capture the current lines plus derived totals.
    pub fn snapshot(&self) -> Result<CartSnapshot, CommerceError> {
        Ok(CartSnapshot {
            lines: self.lines.clone(),
            total_quantity: self.total_quantity(),
            total_value: self.total_value()?,
        })
    }
}

/// A point-in-time copy of the cart with derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Ordered line items.
    pub lines: Vec<CartLine>,
    /// Sum of line quantities.
    pub total_quantity: i64,
    /// Sum of (quantity × price).
    pub total_value: Money,
}

impl CartSnapshot {
    /// Check if the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::demo()
            .get(&ProductId::new(id))
            .expect("demo product")
            .clone()
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 2);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 1);
        cart.add_or_increment(&product("p-101"), 2);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_clamps_to_one() {
        let mut cart = Cart::default();
        let delta = cart.add_or_increment(&product("p-101"), 0);
        assert_eq!(delta, 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 2);
        let id = ProductId::new("p-101");
        assert!(cart.change_quantity(&id, -1));
        assert_eq!(cart.get(&id).unwrap().qty, 1);
        // Further decrement never removes the line.
        assert!(cart.change_quantity(&id, -5));
        assert_eq!(cart.get(&id).unwrap().qty, 1);
    }

    #[test]
    fn test_change_quantity_missing_line() {
        let mut cart = Cart::default();
        assert!(!cart.change_quantity(&ProductId::new("p-101"), 1));
    }

    #[test]
    fn test_remove_returns_pre_removal_qty() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 3);
        let removed = cart.remove(&ProductId::new("p-101")).unwrap();
        assert_eq!(removed.qty, 3);
        assert!(cart.is_empty());
        assert!(cart.remove(&ProductId::new("p-101")).is_none());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 2); // 2 × 299
        cart.add_or_increment(&product("p-104"), 1); // 1 × 799
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_value().unwrap(), Money::inr(1397));
    }

    #[test]
    fn test_total_matches_line_sums_after_mutations() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 2);
        cart.add_or_increment(&product("p-102"), 1);
        cart.change_quantity(&ProductId::new("p-102"), 3);
        cart.remove(&ProductId::new("p-101"));
        cart.add_or_increment(&product("p-103"), 1);

        let expected: i64 = cart
            .lines
            .iter()
            .map(|l| l.price.amount_minor * l.qty)
            .sum();
        assert_eq!(cart.total_value().unwrap().amount_minor, expected);
        assert!(cart.lines.iter().all(|l| l.qty >= 1));
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 1);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "p-101");
        assert_eq!(json[0]["qty"], 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut cart = Cart::default();
        cart.add_or_increment(&product("p-101"), 2);
        let snap = cart.snapshot().unwrap();
        cart.clear();
        assert_eq!(snap.total_quantity, 2);
        assert_eq!(snap.total_value, Money::inr(598));
    }
}
