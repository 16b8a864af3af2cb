//! Error types for backing-store operations.
//!
//! These never reach callers of the public cart operations: every failure
//! is absorbed inside the cart and mapped to an empty read or an ignored
//! write. They exist so the swallowing happens at one explicit boundary
//! instead of being scattered through the call sites.

use thiserror::Error;

/// Failures raised by store writes and cart serialization.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backing store not available.
    #[error("backing store not available")]
    Unavailable,
    /// Failed to serialize the item list to JSON.
    #[error("failed to serialize item list")]
    SerializationFailed,
    /// Write rejected by the backing store (quota exceeded or similar).
    #[error("failed to write to backing store")]
    WriteFailed,
}
