//! In-memory capability doubles for native tests.
//!
//! Both types share their state through `Rc`, so a clone handed to a
//! [`CartStore`](crate::core::cart::CartStore) and the copy kept by the
//! test observe the same entries and subscribers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::core::error::StoreError;
use crate::core::store::{Broadcaster, KeyValueStore};

/// In-memory [`KeyValueStore`] with switchable write failure.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw value under `key`, bypassing the write-failure switch.
    /// The value may be well-formed or deliberately corrupt.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Make subsequent [`set`](KeyValueStore::set) calls fail, simulating
    /// quota exhaustion.
    pub fn fail_writes(&self, fail: bool) {
        self.fail.set(fail);
    }

    /// Read back the raw persisted value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail.get() {
            return Err(StoreError::WriteFailed);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// In-memory [`Broadcaster`] with synchronous dispatch in registration
/// order.
///
/// Dispatch holds the subscriber borrow, so callbacks must not re-enter
/// the bus.
#[derive(Clone, Default)]
pub struct MemoryBus {
    subscribers: Rc<RefCell<HashMap<String, Vec<Box<dyn Fn(&Value)>>>>>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Broadcaster for MemoryBus {
    fn emit(&self, event: &str, payload: Value) {
        if let Some(callbacks) = self.subscribers.borrow().get(event) {
            for callback in callbacks {
                callback(&payload);
            }
        }
    }

    fn subscribe(&self, event: &str, callback: Box<dyn Fn(&Value)>) {
        self.subscribers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(callback);
    }
}
