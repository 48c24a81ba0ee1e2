//! Cart error types.

use thiserror::Error;

/// Errors from pure cart mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The combined quantity would exceed the per-item cap.
    #[error("Quantity {requested} for {name:?} exceeds the limit of {limit}")]
    QuantityLimit {
        name: String,
        requested: u32,
        limit: u32,
    },

    /// The index does not refer to a line item.
    #[error("No line item at index {index} (cart has {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Errors from the persisted cart store.
///
/// Reads never produce these: an unreadable or malformed slot loads as the
/// empty cart. Only failures to write the slot surface as errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage slot could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] bodega_storage::StorageError),

    /// The cart could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
