//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::price::Price;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY: u32 = 99;

/// A product as presented on the storefront.
///
/// The name doubles as the identity key inside a cart: two products with
/// the same name land on the same line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name and cart identity key.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Opaque image reference, carried for display only.
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// One distinct product entry in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name; unique within a cart.
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: Price,
    /// Image reference for display.
    pub image: String,
    /// Always within `1..=MAX_QUANTITY`.
    pub quantity: u32,
}

impl LineItem {
    /// The line item a product enters the cart as. Quantity starts at 1.
    fn first_of(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity). Saturates rather than overflows.
    pub fn line_total(&self) -> Price {
        self.price.saturating_mul(self.quantity)
    }
}

/// An ordered sequence of line items, insertion order preserved.
///
/// Serializes as a bare JSON array of items — the persisted slot holds the
/// array itself, not a wrapper object.
///
/// Invariants: no two items share a name, and every quantity stays within
/// `1..=MAX_QUANTITY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// What [`Cart::decrease`] did to the targeted line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity went down by one.
    Decremented,
    /// The item was at quantity 1 and has been removed.
    Removed,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current position of the item named `name`.
    ///
    /// Unlike an index captured at render time, the name stays a stable key
    /// across mutations.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Add `quantity` of `product`.
    ///
    /// A product already in the cart has the requested quantity added to
    /// its line item; if the combined total would pass [`MAX_QUANTITY`] the
    /// cart is left untouched and the add is rejected. A product not yet in
    /// the cart enters at quantity 1, whatever quantity was requested.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == product.name) {
            let combined = item.quantity.saturating_add(quantity);
            if combined > MAX_QUANTITY {
                return Err(CartError::QuantityLimit {
                    name: product.name.clone(),
                    requested: combined,
                    limit: MAX_QUANTITY,
                });
            }
            item.quantity = combined;
            return Ok(());
        }

        self.items.push(LineItem::first_of(product));
        Ok(())
    }

    /// Increment the quantity at `index` by one, up to [`MAX_QUANTITY`].
    pub fn increase(&mut self, index: usize) -> Result<(), CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::OutOfRange { index, len })?;

        if item.quantity >= MAX_QUANTITY {
            return Err(CartError::QuantityLimit {
                name: item.name.clone(),
                requested: item.quantity.saturating_add(1),
                limit: MAX_QUANTITY,
            });
        }
        item.quantity += 1;
        Ok(())
    }

    /// Decrement the quantity at `index`, removing the item at quantity 1.
    pub fn decrease(&mut self, index: usize) -> Result<QuantityChange, CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::OutOfRange { index, len })?;

        if item.quantity > 1 {
            item.quantity -= 1;
            Ok(QuantityChange::Decremented)
        } else {
            self.items.remove(index);
            Ok(QuantityChange::Removed)
        }
    }

    /// Delete and return the line item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities; drives the navigation badge.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> Price {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Price::zero(), Price::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product::new("Mug", Price::from_decimal(10.0), "m.png")
    }

    fn tee() -> Product {
        Product::new("Tee", Price::from_decimal(5.5), "t.png")
    }

    #[test]
    fn test_new_item_enters_at_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&mug(), 5).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().quantity, 1);
        assert_eq!(cart.total_price(), Price::from_decimal(10.0));
    }

    #[test]
    fn test_add_existing_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&mug(), 3).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().quantity, 4);
    }

    #[test]
    fn test_add_over_limit_rejected_and_unchanged() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        for _ in 0..97 {
            cart.increase(0).unwrap();
        }
        assert_eq!(cart.get(0).unwrap().quantity, 98);

        let before = cart.clone();
        let err = cart.add(&mug(), 5).unwrap_err();
        assert_eq!(
            err,
            CartError::QuantityLimit {
                name: "Mug".to_string(),
                requested: 103,
                limit: MAX_QUANTITY,
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_zero_quantity_is_a_no_change_add() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&mug(), 0).unwrap();
        assert_eq!(cart.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn test_names_stay_unique_across_adds() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&tee(), 1).unwrap();
        cart.add(&mug(), 2).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.position_of("Mug"), Some(0));
        assert_eq!(cart.position_of("Tee"), Some(1));
    }

    #[test]
    fn test_increase_caps_at_limit() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        for _ in 0..98 {
            cart.increase(0).unwrap();
        }
        assert_eq!(cart.get(0).unwrap().quantity, MAX_QUANTITY);

        let err = cart.increase(0).unwrap_err();
        assert!(matches!(err, CartError::QuantityLimit { .. }));
        assert_eq!(cart.get(0).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_increase_out_of_range() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.increase(0),
            Err(CartError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_decrease_decrements_above_one() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.increase(0).unwrap();

        assert_eq!(cart.decrease(0), Ok(QuantityChange::Decremented));
        assert_eq!(cart.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrease_at_one_removes_item() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();

        assert_eq!(cart.decrease(0), Ok(QuantityChange::Removed));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&tee(), 1).unwrap();

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name, "Mug");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().name, "Tee");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        assert_eq!(
            cart.remove(3),
            Err(CartError::OutOfRange { index: 3, len: 1 })
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();
        cart.add(&tee(), 1).unwrap();
        cart.increase(1).unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), Price::from_decimal(21.0));
    }

    #[test]
    fn test_quantities_stay_bounded_across_add_sequences() {
        let mut cart = Cart::new();
        for qty in [1, 50, 98, 99, 40] {
            let _ = cart.add(&mug(), qty);
            let _ = cart.add(&tee(), qty);
            for item in cart.items() {
                assert!((1..=MAX_QUANTITY).contains(&item.quantity));
            }
        }
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::new();
        cart.add(&mug(), 1).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Mug","price":10.0,"image":"m.png","quantity":1}]"#
        );

        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
