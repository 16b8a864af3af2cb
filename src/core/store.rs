//! Capability traits for the backing store and the notification channel.
//!
//! In the browser both are ambient, page-wide resources: localStorage and
//! the window event target. They are injected into the cart as explicit
//! capabilities instead, so the same logic runs against in-memory doubles
//! in native tests.

use serde_json::Value;

use crate::core::error::StoreError;

/// Synchronous string key-value store, scoped per browsing session.
pub trait KeyValueStore {
    /// Read the value under `key`.
    ///
    /// `None` covers both an absent key and an unreachable store; callers
    /// treat the two identically.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Synchronous publish/subscribe channel for named events.
pub trait Broadcaster {
    /// Fire `event` with a JSON payload, delivered to every subscriber.
    fn emit(&self, event: &str, payload: Value);

    /// Register `callback` for every future `event`.
    ///
    /// There is no unsubscription; registrations live as long as the
    /// channel does.
    fn subscribe(&self, event: &str, callback: Box<dyn Fn(&Value)>);
}
