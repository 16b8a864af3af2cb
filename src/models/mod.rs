//! Data models and types for the storefront.
//!
//! Contains domain types for:
//! - [`Addon`], [`AddonType`], [`AddonDescription`] - catalog entries

mod addon;

pub use addon::{Addon, AddonDescription, AddonType};
