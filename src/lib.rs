//! Client-side shopping cart for the addon storefront.
//!
//! Persists the list of selected addon ids in localStorage and fires a
//! `cart-updated` window event whenever the list changes. Storage and
//! notification are injected as capabilities ([`KeyValueStore`],
//! [`Broadcaster`]), so the cart logic also runs natively against the
//! in-memory doubles used in tests.
//!
//! Storage failures are absorbed internally: reads degrade to an empty
//! cart and writes are ignored, keeping the calling UI working.

pub mod config;
mod core;
mod models;
#[cfg(target_arch = "wasm32")]
mod utils;

#[cfg(target_arch = "wasm32")]
pub use crate::core::{LocalStorage, WindowBus, browser_cart};
#[cfg(any(test, feature = "mock"))]
pub use crate::core::{MemoryBus, MemoryStore};
pub use crate::core::{Broadcaster, CartStore, KeyValueStore, StoreError};
pub use models::{Addon, AddonDescription, AddonType};
