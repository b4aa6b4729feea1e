//! Storefront API client.
//!
//! This module provides everything needed to talk to the remote Storefront
//! API: the client itself, the fixed GraphQL documents it sends, the typed
//! records it validates responses into, and the client error taxonomy.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontClient`]: executes the fixed GraphQL documents against one
//!   shop and unwraps the `{data, errors?}` envelope
//! - [`Product`], [`ProductVariant`], [`ProductImage`], [`Money`]: validated
//!   catalog records
//! - [`RemoteCart`], [`CartLineInput`]: checkout creation input/output
//! - [`ClientError`], [`TransportError`], [`ApiError`]: failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_sdk::{AccessToken, ShopDomain, StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("storefront-token")?)
//!     .build()?;
//! let client = StorefrontClient::new(&config);
//!
//! let featured = client.featured(6).await?;
//! for product in &featured {
//!     println!("{} ({})", product.title, product.handle);
//! }
//! ```

mod errors;
pub mod queries;
mod storefront;
mod types;

pub use errors::{ApiError, ClientError, TransportError};
pub use storefront::{StorefrontClient, ACCESS_TOKEN_HEADER};
pub use types::{
    CartLineInput, Money, Product, ProductImage, ProductVariant, RemoteCart, RemoteCartLine,
    UserError,
};
