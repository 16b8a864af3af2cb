//! Shopping cart persistence and change notification.
//!
//! The cart is a single ordered list of addon ids, serialized in its
//! entirety under one key of the backing store. Every operation re-reads
//! that key before acting, so the store stays the single source of truth
//! even when another tab modifies it between calls.

use serde_json::{Value, json};

use crate::config::{CART_EVENT, CART_STORAGE_KEY};
use crate::core::error::StoreError;
use crate::core::store::{Broadcaster, KeyValueStore};

/// Cart façade over an injected [`KeyValueStore`] and [`Broadcaster`].
///
/// Mutations follow a read-modify-write-notify cycle with no in-memory
/// cache. Concurrent writers (e.g. two tabs on the same storage) are
/// uncoordinated: the last writer wins.
pub struct CartStore<S, B> {
    store: S,
    bus: B,
}

impl<S: KeyValueStore, B: Broadcaster> CartStore<S, B> {
    pub fn new(store: S, bus: B) -> Self {
        Self { store, bus }
    }

    /// Read the persisted item list.
    ///
    /// An absent key, an unreachable store, or a value that is not a JSON
    /// array of strings all degrade to an empty cart.
    fn load(&self) -> Vec<String> {
        let Some(raw) = self.store.get(CART_STORAGE_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn try_save(&self, items: &[String]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items).map_err(|_| StoreError::SerializationFailed)?;
        self.store.set(CART_STORAGE_KEY, &json)
    }

    /// Persist the item list, then broadcast the new count.
    ///
    /// A failed write is swallowed so the current session keeps a
    /// consistent view; the notification fires after the attempt either
    /// way. The next reload simply won't see the change.
    fn save(&self, items: &[String]) {
        let _ = self.try_save(items);
        self.bus.emit(CART_EVENT, json!({ "count": items.len() }));
    }

    /// Add an addon id to the cart. No-op if already present.
    pub fn add(&self, id: &str) {
        let mut items = self.load();
        if !items.iter().any(|item| item == id) {
            items.push(id.to_string());
            self.save(&items);
        }
    }

    /// Remove an addon id from the cart. No-op if not present.
    pub fn remove(&self, id: &str) {
        let mut items = self.load();
        if let Some(index) = items.iter().position(|item| item == id) {
            items.remove(index);
            self.save(&items);
        }
    }

    /// Check whether an addon id is currently in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.load().iter().any(|item| item == id)
    }

    /// Return the number of items currently in the cart.
    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Return a snapshot of the addon ids currently in the cart.
    pub fn items(&self) -> Vec<String> {
        self.load()
    }

    /// Subscribe to cart changes.
    ///
    /// The callback receives the updated item count each time the cart is
    /// modified via [`add`](Self::add) or [`remove`](Self::remove).
    /// Registration is permanent for the lifetime of the channel.
    pub fn on_change(&self, callback: impl Fn(usize) + 'static) {
        self.bus.subscribe(
            CART_EVENT,
            Box::new(move |payload| {
                if let Some(count) = payload.get("count").and_then(Value::as_u64) {
                    callback(count as usize);
                }
            }),
        );
    }
}
