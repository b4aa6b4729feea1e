//! The persistent, observable cart store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::cart::errors::CartError;
use crate::cart::line_item::LineItem;
use crate::cart::storage::StorageBackend;
use crate::client::{CartLineInput, RemoteCart, StorefrontClient};

/// Storage key the cart is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "storefront_cart";

/// Snapshot emitted to observers after every persisting mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEvent {
    /// The full item list after the mutation.
    pub items: Vec<LineItem>,
    /// Sum of quantities.
    pub count: u32,
    /// Sum of `unit_price × quantity` over all items.
    pub total: Decimal,
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn Fn(&CartEvent) + Send + Sync>;

/// A durable, observable shopping cart.
///
/// The store keeps an ordered list of [`LineItem`] serialized as one JSON
/// value under a single key of an injected [`StorageBackend`]. Every
/// mutation is a read-modify-write against storage followed by a
/// synchronous notification to all subscribed observers.
///
/// There is no global instance: construct one store per cart and share it
/// (`CartStore` is `Send + Sync`; mutations serialize through storage and
/// the observer list is behind its own lock).
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_sdk::{CartStore, LineItem, MemoryStorage};
///
/// let cart = CartStore::new(MemoryStorage::new());
///
/// cart.add_item(LineItem {
///     variant_id: "v1".to_string(),
///     product_id: "p1".to_string(),
///     title: "Ventilateur USB".to_string(),
///     unit_price: Decimal::new(1299, 2),
///     quantity: 2,
///     image_url: None,
///     handle: "ventilateur-usb-portable".to_string(),
/// })
/// .unwrap();
///
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.total(), Decimal::new(2598, 2));
/// ```
pub struct CartStore<S> {
    storage: S,
    key: String,
    observers: Mutex<Vec<(ObserverId, Observer)>>,
    next_observer: AtomicU64,
}

// Verify CartStore is Send + Sync at compile time (for a Send + Sync backend)
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CartStore<crate::cart::storage::MemoryStorage>>();
};

impl<S: StorageBackend> CartStore<S> {
    /// Creates a store persisting under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store persisting under a custom key.
    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
        }
    }

    /// Returns the current item list.
    ///
    /// A missing, unreadable, or corrupt stored value yields an empty list;
    /// corruption is recovered locally and never surfaced to the caller.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "cart storage read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding corrupt cart data");
                Vec::new()
            }
        }
    }

    /// Adds an item to the cart.
    ///
    /// If an item with the same `variant_id` already exists, its quantity is
    /// incremented by `item.quantity`; otherwise the item is appended.
    /// Persists, then notifies.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend cannot be written.
    pub fn add_item(&self, item: LineItem) -> Result<(), CartError> {
        let mut items = self.items();

        match items
            .iter_mut()
            .find(|existing| existing.variant_id == item.variant_id)
        {
            Some(existing) => existing.quantity += item.quantity,
            None => items.push(item),
        }

        self.persist(&items)
    }

    /// Sets the quantity of the item with the given `variant_id`.
    ///
    /// A quantity of zero removes the item. If no item matches, nothing is
    /// persisted and no notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend cannot be written.
    pub fn set_quantity(&self, variant_id: &str, quantity: u32) -> Result<(), CartError> {
        let mut items = self.items();

        let Some(index) = items.iter().position(|item| item.variant_id == variant_id) else {
            return Ok(());
        };

        if quantity == 0 {
            items.remove(index);
        } else if let Some(item) = items.get_mut(index) {
            item.quantity = quantity;
        }

        self.persist(&items)
    }

    /// Removes the item with the given `variant_id`.
    ///
    /// Persists and notifies even when no item matched, carrying the
    /// unchanged list.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend cannot be written.
    pub fn remove_item(&self, variant_id: &str) -> Result<(), CartError> {
        let mut items = self.items();
        items.retain(|item| item.variant_id != variant_id);
        self.persist(&items)
    }

    /// Empties the cart. Persists, then notifies.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend cannot be written.
    pub fn clear(&self) -> Result<(), CartError> {
        self.persist(&[])
    }

    /// Returns the sum of quantities across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    /// Returns the cart total, `Σ(unit_price × quantity)`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items().iter().map(LineItem::line_total).sum()
    }

    /// Creates a remote cart from the current items.
    ///
    /// On success the returned [`RemoteCart`] carries the checkout URL for
    /// the caller to navigate to. Local cart state is never mutated here:
    /// clearing after a completed checkout is the caller's decision, and an
    /// API failure must leave the cart intact.
    ///
    /// # Errors
    ///
    /// - [`CartError::Empty`] if the cart has no items; the remote API is
    ///   not called
    /// - [`CartError::Client`] with the API's first user-facing message if
    ///   the remote rejects the cart (invalid variant, insufficient stock)
    pub async fn checkout(&self, client: &StorefrontClient) -> Result<RemoteCart, CartError> {
        let items = self.items();
        if items.is_empty() {
            return Err(CartError::Empty);
        }

        let lines: Vec<CartLineInput> = items
            .iter()
            .map(|item| CartLineInput {
                merchandise_id: item.variant_id.clone(),
                quantity: item.quantity,
            })
            .collect();

        let cart = client.create_cart(&lines).await?;
        debug!(checkout_url = %cart.checkout_url, "remote cart created");
        Ok(cart)
    }

    /// Registers an observer called after every persisting mutation.
    ///
    /// Delivery is synchronous and in-process, on the mutating call's
    /// stack. The observer list is locked during delivery, so callbacks
    /// must not mutate the cart or manage subscriptions. The returned id
    /// unsubscribes via [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, observer: impl Fn(&CartEvent) + Send + Sync + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut observers) = self.observers.lock() {
            observers.push((id, Box::new(observer)));
        }
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `true` if the observer was registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let Ok(mut observers) = self.observers.lock() else {
            return false;
        };
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != before
    }

    /// Serializes and writes the item list, then notifies observers.
    fn persist(&self, items: &[LineItem]) -> Result<(), CartError> {
        let raw = serde_json::to_vec(items)
            .map_err(crate::cart::storage::StorageError::Encode)?;
        self.storage.set(&self.key, &raw)?;
        self.notify(items);
        Ok(())
    }

    /// Emits a [`CartEvent`] snapshot to every observer.
    fn notify(&self, items: &[LineItem]) {
        let event = CartEvent {
            items: items.to_vec(),
            count: items.iter().map(|item| item.quantity).sum(),
            total: items.iter().map(LineItem::line_total).sum(),
        };

        let Ok(observers) = self.observers.lock() else {
            warn!("observer list unavailable; skipping cart notification");
            return;
        };
        for (_, observer) in observers.iter() {
            observer(&event);
        }
    }
}
