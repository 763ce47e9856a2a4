use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Errors {
  #[error("key not found in store")]
  KeyNotFound,

  #[error("failed to initialize store environment: {0}")]
  InitializationFailed(String),

  #[error("storage engine failure: {0}")]
  StorageFailure(String),
}

pub type Result<T> = std::result::Result<T, Errors>;

impl Errors {
  /// Classifies an engine error at the storage boundary. Absence has two
  /// engine-level shapes, a keyspace that was never created and a key that
  /// was never written; both collapse into `KeyNotFound`. Everything else
  /// stays opaque.
  pub(crate) fn from_engine(err: jammdb::Error) -> Errors {
    match err {
      jammdb::Error::BucketMissing | jammdb::Error::KeyValueMissing => Errors::KeyNotFound,
      other => Errors::StorageFailure(other.to_string()),
    }
  }
}
