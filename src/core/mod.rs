//! Core cart logic and storage capabilities.
//!
//! This module provides:
//! - [`CartStore`] - read-modify-write cart operations over injected
//!   capabilities
//! - [`KeyValueStore`], [`Broadcaster`] - the capability traits
//! - [`LocalStorage`], [`WindowBus`] - browser-backed implementations
//! - [`MemoryStore`], [`MemoryBus`] - in-memory doubles for tests

#[cfg(target_arch = "wasm32")]
mod browser;
mod cart;
pub mod error;
#[cfg(any(test, feature = "mock"))]
mod memory;
mod store;

#[cfg(target_arch = "wasm32")]
pub use browser::{LocalStorage, WindowBus, browser_cart};
pub use cart::CartStore;
pub use error::StoreError;
#[cfg(any(test, feature = "mock"))]
pub use memory::{MemoryBus, MemoryStore};
pub use store::{Broadcaster, KeyValueStore};
