//! Application configuration.
//!
//! Centralizes the storage key and event name shared by the cart.

/// localStorage key holding the serialized cart item list.
pub const CART_STORAGE_KEY: &str = "ea-cart";

/// Name of the window event fired after every cart save.
pub const CART_EVENT: &str = "cart-updated";
