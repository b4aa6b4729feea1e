//! Persistent, observable shopping cart.
//!
//! This module provides the local cart: an ordered list of line items kept
//! in an injected key/value [`StorageBackend`], mutated through
//! [`CartStore`], and broadcast to observers after every persisting change.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CartStore`]: durable cart with add/update/remove/clear mutations,
//!   aggregates, checkout, and observer registration
//! - [`LineItem`]: one variant/quantity pair with its display data
//! - [`CartEvent`]: the `{items, count, total}` snapshot observers receive
//! - [`StorageBackend`], [`MemoryStorage`], [`FileStorage`]: the persistence
//!   seam and the backends that ship with the crate
//! - [`CartError`], [`StorageError`]: failure taxonomy
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_sdk::{CartStore, LineItem, MemoryStorage};
//!
//! let cart = CartStore::new(MemoryStorage::new());
//!
//! let badge = cart.subscribe(|event| {
//!     println!("{} article(s), total {}", event.count, event.total);
//! });
//!
//! cart.add_item(LineItem {
//!     variant_id: "v1".to_string(),
//!     product_id: "p1".to_string(),
//!     title: "Écouteurs Bluetooth".to_string(),
//!     unit_price: Decimal::new(4999, 2),
//!     quantity: 1,
//!     image_url: None,
//!     handle: "ecouteurs-bluetooth".to_string(),
//! })
//! .unwrap();
//!
//! cart.unsubscribe(badge);
//! ```

mod errors;
mod line_item;
mod storage;
mod store;

pub use errors::CartError;
pub use line_item::LineItem;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{CartEvent, CartStore, ObserverId, DEFAULT_STORAGE_KEY};
