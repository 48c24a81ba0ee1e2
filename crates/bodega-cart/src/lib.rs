//! Shopping cart domain and persisted store for the bodega storefront.
//!
//! The cart is a small, ordered list of named line items with bounded
//! quantities. It lives in a single named storage slot between sessions and
//! is re-read, mutated, and re-persisted on every operation — there is no
//! long-lived in-memory instance.
//!
//! # Example
//!
//! ```rust,ignore
//! use bodega_cart::prelude::*;
//! use bodega_storage::MemoryStore;
//!
//! let mut store = CartStore::new(MemoryStore::new());
//!
//! let mug = Product::new("Mug", Price::from_decimal(10.0), "mug.png");
//! store.add_item(&mug, 1)?;
//!
//! let cart = store.load();
//! assert_eq!(cart.total_quantity(), 1);
//! assert_eq!(cart.total_price().display(), "10.00");
//!
//! store.checkout()?;
//! assert!(store.load().is_empty());
//! ```

pub mod cart;
pub mod error;
pub mod price;
pub mod store;

pub use cart::{Cart, LineItem, Product, QuantityChange, MAX_QUANTITY};
pub use error::{CartError, StoreError};
pub use price::Price;
pub use store::{
    CartStore, CartUpdate, CheckoutSummary, CountSink, Notifier, NullCountSink, NullNotifier,
    CART_SLOT,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem, Product, QuantityChange, MAX_QUANTITY};
    pub use crate::error::{CartError, StoreError};
    pub use crate::price::Price;
    pub use crate::store::{
        CartStore, CartUpdate, CheckoutSummary, CountSink, Notifier, NullCountSink, NullNotifier,
        CART_SLOT,
    };
}
