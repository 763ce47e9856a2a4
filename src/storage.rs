use bytes::Bytes;

use crate::errors::Result;

/// Capability contract for a byte-key/byte-value backend.
///
/// Request handlers depend only on this trait, so the concrete engine can
/// be swapped for a different embedded or in-memory backend without
/// touching request-handling logic.
pub trait Storage: Sync + Send {
  /// Retrieves the value stored under `key`, or `Errors::KeyNotFound` if
  /// the key was never written or has been deleted.
  fn get(&self, key: Bytes) -> Result<Bytes>;

  /// Stores `value` under `key`, unconditionally replacing any previous
  /// value. Empty values are accepted here; rejecting them is the
  /// caller's policy.
  fn set(&self, key: Bytes, value: Bytes) -> Result<()>;

  /// Removes `key` from the store, or `Errors::KeyNotFound` if it is
  /// absent.
  fn del(&self, key: Bytes) -> Result<()>;
}
