//! Error types for cart operations.

use thiserror::Error;

use crate::cart::storage::StorageError;
use crate::client::ClientError;

/// Errors raised by [`CartStore`](super::CartStore) operations.
///
/// Remote failures pass through unchanged: a validation message reported by
/// the API during checkout surfaces here exactly as
/// [`ClientError::Api`](crate::ClientError::Api) carried it, so the UI layer
/// can display it verbatim.
#[derive(Debug, Error)]
pub enum CartError {
    /// Checkout was attempted on an empty cart; the remote API is not called.
    #[error("cart is empty")]
    Empty,

    /// A remote API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The persistence backend failed to write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
