//! Persisted cart store.
//!
//! [`CartStore`] is the only I/O boundary around [`Cart`]: it re-reads the
//! storage slot at the start of every operation, applies one mutation, and
//! commits the result. Committing writes the serialized cart and pushes the
//! total-quantity projection in one step, so the persisted state and the
//! badge count never diverge from the caller's point of view.

use bodega_storage::Storage;

use crate::cart::{Cart, Product};
use crate::error::{CartError, StoreError};
use crate::price::Price;

/// Default storage slot holding the serialized cart.
pub const CART_SLOT: &str = "cart";

/// Consumer of transient user notices ("Item added to cart!").
///
/// The store calls this purely for feedback and does not depend on the
/// outcome; how (or whether) a notice is displayed is up to the front end.
pub trait Notifier {
    /// Display `message` to the user.
    fn notify(&self, message: &str);
}

/// A `Notifier` that drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// Consumer of the derived total-quantity projection (the nav badge).
pub trait CountSink {
    /// The cart now holds `total` units across all line items.
    fn set_count(&self, total: u32);
}

/// A `CountSink` that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCountSink;

impl CountSink for NullCountSink {
    fn set_count(&self, _total: u32) {}
}

/// Outcome of a mutating cart operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartUpdate {
    /// The mutation was applied and persisted.
    Applied(Cart),
    /// A quantity limit blocked the mutation; the cart is unchanged and the
    /// user has been notified.
    Rejected(Cart),
    /// The index did not refer to a line item; nothing happened and nothing
    /// was signaled.
    Skipped(Cart),
}

impl CartUpdate {
    /// The cart after the operation (unchanged for `Rejected`/`Skipped`).
    pub fn cart(&self) -> &Cart {
        match self {
            CartUpdate::Applied(cart) | CartUpdate::Rejected(cart) | CartUpdate::Skipped(cart) => {
                cart
            }
        }
    }

    /// Consume the update, returning the cart.
    pub fn into_cart(self) -> Cart {
        match self {
            CartUpdate::Applied(cart) | CartUpdate::Rejected(cart) | CartUpdate::Skipped(cart) => {
                cart
            }
        }
    }

    /// Whether the mutation was applied and persisted.
    pub fn is_applied(&self) -> bool {
        matches!(self, CartUpdate::Applied(_))
    }
}

/// Totals captured by [`CartStore::checkout`] before the cart is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    /// Order total.
    pub total: Price,
    /// Units across all line items.
    pub total_quantity: u32,
}

/// The persisted shopping cart.
///
/// Owns a [`Storage`] handle and a slot key, plus two collaborator seams:
/// a [`Notifier`] for user notices and a [`CountSink`] for the badge
/// projection. Both default to no-ops.
///
/// Index arguments refer to positions in the cart as last loaded; a
/// mutation shifts positions, so an index is only valid until the next
/// mutating call.
///
/// The read-modify-write cycle takes no lock on the slot. A single active
/// caller is assumed; two processes (or browser tabs) sharing one slot can
/// lose updates to each other.
pub struct CartStore<S> {
    storage: S,
    slot: String,
    notifier: Box<dyn Notifier>,
    count_sink: Box<dyn CountSink>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over `storage`, using the default `"cart"` slot.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            slot: CART_SLOT.to_string(),
            notifier: Box::new(NullNotifier),
            count_sink: Box::new(NullCountSink),
        }
    }

    /// Use a different slot key.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Attach a notice consumer.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Attach a badge-count consumer.
    pub fn with_count_sink(mut self, sink: impl CountSink + 'static) -> Self {
        self.count_sink = Box::new(sink);
        self
    }

    /// The underlying storage handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// An absent slot, an unreadable slot, and non-parsing contents all load
    /// as the empty cart; storage corruption never surfaces as an error.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "cart slot unreadable, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "discarding malformed cart");
                Cart::new()
            }
        }
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// On success the cart is persisted and the user sees an "added" notice.
    /// Passing the 99-per-item cap rejects the add: the persisted bytes are
    /// left untouched and the user sees a limit notice instead.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> Result<CartUpdate, StoreError> {
        let mut cart = self.load();
        match cart.add(product, quantity) {
            Ok(()) => {
                self.commit(&cart)?;
                self.notifier.notify("Item added to cart!");
                Ok(CartUpdate::Applied(cart))
            }
            // only the quantity cap can block an add
            Err(_) => {
                self.notifier
                    .notify("You can only add up to 99 of the same item.");
                Ok(CartUpdate::Rejected(cart))
            }
        }
    }

    /// Increment the quantity at `index` by one.
    ///
    /// At the cap the increment is rejected with a limit notice. An index
    /// past the end of the cart is skipped without persistence or signal.
    pub fn increase_quantity(&mut self, index: usize) -> Result<CartUpdate, StoreError> {
        let mut cart = self.load();
        match cart.increase(index) {
            Ok(()) => {
                self.commit(&cart)?;
                Ok(CartUpdate::Applied(cart))
            }
            Err(CartError::QuantityLimit { .. }) => {
                self.notifier
                    .notify("You can only have up to 99 of this item.");
                Ok(CartUpdate::Rejected(cart))
            }
            Err(CartError::OutOfRange { .. }) => {
                tracing::debug!(index, "increase past end of cart ignored");
                Ok(CartUpdate::Skipped(cart))
            }
        }
    }

    /// Decrement the quantity at `index`, removing the item at quantity 1.
    ///
    /// An index past the end of the cart is skipped without persistence.
    pub fn decrease_quantity(&mut self, index: usize) -> Result<CartUpdate, StoreError> {
        let mut cart = self.load();
        match cart.decrease(index) {
            Ok(_) => {
                self.commit(&cart)?;
                Ok(CartUpdate::Applied(cart))
            }
            Err(_) => {
                tracing::debug!(index, "decrease past end of cart ignored");
                Ok(CartUpdate::Skipped(cart))
            }
        }
    }

    /// Delete the line item at `index`; positions after it shift down.
    pub fn remove_item(&mut self, index: usize) -> Result<CartUpdate, StoreError> {
        let mut cart = self.load();
        match cart.remove(index) {
            Ok(_) => {
                self.commit(&cart)?;
                Ok(CartUpdate::Applied(cart))
            }
            Err(_) => {
                tracing::debug!(index, "remove past end of cart ignored");
                Ok(CartUpdate::Skipped(cart))
            }
        }
    }

    /// Delete every item, clearing the slot and zeroing the badge.
    pub fn clear(&mut self) -> Result<Cart, StoreError> {
        self.storage.remove(&self.slot)?;
        self.count_sink.set_count(0);
        tracing::debug!(slot = %self.slot, "cart cleared");
        Ok(Cart::new())
    }

    /// Confirm the order: notify the user with the order total, then clear.
    pub fn checkout(&mut self) -> Result<CheckoutSummary, StoreError> {
        let cart = self.load();
        let summary = CheckoutSummary {
            total: cart.total_price(),
            total_quantity: cart.total_quantity(),
        };

        self.notifier.notify(&format!(
            "Your order has been confirmed! Total amount: {}.",
            summary.total
        ));
        self.clear()?;
        Ok(summary)
    }

    /// Persist `cart` and push the badge projection, as one commit.
    fn commit(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(&self.slot, &raw)?;
        self.count_sink.set_count(cart.total_quantity());
        tracing::debug!(
            slot = %self.slot,
            items = cart.len(),
            total_quantity = cart.total_quantity(),
            "cart persisted"
        );
        Ok(())
    }
}
