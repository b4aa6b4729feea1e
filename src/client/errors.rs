//! Error types for Storefront API operations.
//!
//! This module contains the error types raised while talking to the remote
//! Storefront API.
//!
//! # Error Handling
//!
//! The client distinguishes failure layers:
//!
//! - [`TransportError`]: the HTTP exchange itself failed (non-2xx status)
//! - [`ApiError`]: the API answered, but reported a GraphQL error or a
//!   user-facing validation error (e.g. insufficient stock on checkout)
//! - [`ClientError`]: unified error type encompassing both, plus network
//!   failures and response-shape mismatches
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_sdk::ClientError;
//!
//! match client.product_by_handle("my-product").await {
//!     Ok(Some(product)) => println!("{}", product.title),
//!     Ok(None) => println!("no such product"),
//!     Err(ClientError::Transport(e)) => println!("HTTP {}: {}", e.status, e.body),
//!     Err(ClientError::Api(e)) => println!("API error: {}", e.message),
//!     Err(ClientError::Network(e)) => println!("network error: {e}"),
//!     Err(ClientError::Schema(e)) => println!("unexpected response shape: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API responds with a non-successful HTTP status.
///
/// The raw response body is carried along for diagnostics; Storefront API
/// transport failures are not JSON in general (proxies, CDN error pages).
///
/// # Example
///
/// ```rust
/// use storefront_sdk::TransportError;
///
/// let error = TransportError {
///     status: 503,
///     body: "upstream unavailable".to_string(),
/// };
/// assert_eq!(error.to_string(), "HTTP status 503: upstream unavailable");
/// ```
#[derive(Debug, Error)]
#[error("HTTP status {status}: {body}")]
pub struct TransportError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

/// Error reported by the API inside a successful HTTP response.
///
/// GraphQL-level errors and mutation `userErrors` arrive with HTTP 200; the
/// client unwraps the envelope and surfaces the first reported message,
/// which is the user-facing one for validation failures.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::ApiError;
///
/// let error = ApiError {
///     message: "Insufficient stock".to_string(),
/// };
/// assert_eq!(error.to_string(), "Insufficient stock");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The first error message reported by the API.
    pub message: String,
}

/// Unified error type for all Storefront API client operations.
///
/// # Example
///
/// ```rust,ignore
/// match client.list_products().await {
///     Ok(products) => { /* ... */ }
///     Err(ClientError::Transport(e)) => { /* non-2xx response */ }
///     Err(ClientError::Api(e)) => { /* GraphQL or validation error */ }
///     Err(ClientError::Network(e)) => { /* connection failure */ }
///     Err(ClientError::Schema(e)) => { /* response didn't match the expected shape */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange failed with a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API reported a GraphQL-level or user-facing validation error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response did not match the expected shape.
    ///
    /// Raised when the `data` payload fails typed-record validation, so a
    /// schema drift surfaces as an error instead of missing fields.
    #[error("Unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),
}
