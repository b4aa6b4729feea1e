//! # Storefront SDK
//!
//! A Rust client for a Shopify storefront, pairing the remote Storefront
//! GraphQL API with a persistent local shopping cart.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Validated newtypes for the shop domain, access token, and API version
//! - A GraphQL [`StorefrontClient`] for catalog queries and checkout creation,
//!   with responses validated into typed records
//! - A durable, observable [`CartStore`] over an injected [`StorageBackend`]
//! - Pure HTML/price formatting helpers in [`render`]
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_sdk::{AccessToken, ApiVersion, ShopDomain, StorefrontConfig};
//!
//! // Create configuration using the builder pattern
//! let config = StorefrontConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("storefront-access-token").unwrap())
//!     .api_version(ApiVersion::new("2024-01").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Catalog Queries
//!
//! ```rust,ignore
//! use storefront_sdk::StorefrontClient;
//!
//! let client = StorefrontClient::new(&config);
//!
//! // Single product
//! if let Some(product) = client.product_by_handle("ecouteurs-bluetooth").await? {
//!     println!("{} — {} variant(s)", product.title, product.variants.len());
//! }
//!
//! // First catalog page, and the featured selection
//! let all = client.list_products().await?;
//! let featured = client.featured(6).await?;
//! ```
//!
//! ## The Cart
//!
//! The cart is an explicit store object: persistence is injected, observers
//! are registered explicitly, and nothing is process-global.
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_sdk::{CartStore, LineItem, MemoryStorage};
//!
//! let cart = CartStore::new(MemoryStorage::new());
//!
//! // A badge that tracks the item count
//! let badge = cart.subscribe(|event| println!("{} article(s)", event.count));
//!
//! cart.add_item(LineItem {
//!     variant_id: "gid://shopify/ProductVariant/11".to_string(),
//!     product_id: "gid://shopify/Product/1".to_string(),
//!     title: "Écouteurs Bluetooth".to_string(),
//!     unit_price: Decimal::new(4999, 2),
//!     quantity: 1,
//!     image_url: None,
//!     handle: "ecouteurs-bluetooth".to_string(),
//! })
//! .unwrap();
//!
//! assert_eq!(cart.item_count(), 1);
//! cart.unsubscribe(badge);
//! ```
//!
//! ## Checkout
//!
//! ```rust,ignore
//! // Fails with CartError::Empty before touching the network when the cart
//! // has no items; otherwise creates a remote cart and hands back its
//! // checkout URL. The local cart is left untouched either way.
//! let remote = cart.checkout(&client).await?;
//! redirect_to(&remote.checkout_url);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration, client, and cart are instance-based
//! - **Fail-fast validation**: newtypes validate on construction; API
//!   responses validate into typed records at the boundary
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Errors pass through**: remote validation messages (e.g. insufficient
//!   stock) reach the caller verbatim; only storage corruption is recovered
//!   silently (as an empty cart)

pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod render;

// Re-export public types at crate root for convenience
pub use cart::{
    CartError, CartEvent, CartStore, FileStorage, LineItem, MemoryStorage, ObserverId,
    StorageBackend, StorageError, DEFAULT_STORAGE_KEY,
};
pub use client::{
    ApiError, CartLineInput, ClientError, Money, Product, ProductImage, ProductVariant,
    RemoteCart, RemoteCartLine, StorefrontClient, TransportError, UserError,
    ACCESS_TOKEN_HEADER,
};
pub use config::{
    AccessToken, ApiVersion, EndpointUrl, ShopDomain, StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::ConfigError;
