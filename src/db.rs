use bytes::Bytes;
use jammdb::{Tx, DB};
use log::{debug, error};
use tempfile::TempDir;

use crate::{
  errors::{Errors, Result},
  storage::Storage,
};

/// Name of the single keyspace every key-value pair lives in. It is
/// materialized lazily by the first read-write transaction that opens it,
/// not at environment-open time.
const BUCKET_NAME: &str = "kvs";

const DB_FILE_NAME: &str = "kvs.db";

const DIR_PREFIX: &str = "pathkv";

/// Storage engine binding: a transactional embedded environment rooted at
/// a private on-disk directory.
///
/// The environment handle is shared read-only state after `open()`
/// completes; any number of threads may issue operations concurrently and
/// the engine serializes writers against each other while readers proceed
/// on a consistent snapshot. `close()` takes the store by value, so a
/// shared (`Arc`-wrapped) store can only be torn down once every clone is
/// gone and no operation is in flight.
pub struct Store {
  env: DB,
  dir: TempDir,
}

impl Store {
  /// Opens a store over a freshly allocated private directory.
  ///
  /// Runs one empty read-write transaction and commits it to confirm the
  /// environment is writable before any caller depends on it. All
  /// failures here are fatal to the caller: a process that cannot open
  /// its store cannot start.
  pub fn open() -> Result<Store> {
    let dir = tempfile::Builder::new()
      .prefix(DIR_PREFIX)
      .tempdir()
      .map_err(|e| Errors::InitializationFailed(e.to_string()))?;

    let env = DB::open(dir.path().join(DB_FILE_NAME))
      .map_err(|e| Errors::InitializationFailed(e.to_string()))?;

    let txn = env
      .tx(true)
      .map_err(|e| Errors::InitializationFailed(e.to_string()))?;
    txn
      .commit()
      .map_err(|e| Errors::InitializationFailed(e.to_string()))?;

    debug!("opened store environment at {}", dir.path().display());
    Ok(Store { env, dir })
  }

  /// Releases the environment handle and removes the private directory.
  ///
  /// Callers must ensure all operations have completed; taking `self` by
  /// value makes that a compile-time obligation for owned stores and an
  /// `Arc::try_unwrap` obligation for shared ones. Dropping a `Store`
  /// performs the same cleanup best-effort, without error reporting.
  pub fn close(self) -> Result<()> {
    let Store { env, dir } = self;
    drop(env);

    debug!("removing store directory {}", dir.path().display());
    dir.close().map_err(|e| {
      error!("failed to remove store directory: {e}");
      Errors::StorageFailure(e.to_string())
    })
  }

  #[cfg(test)]
  pub(crate) fn dir_path(&self) -> std::path::PathBuf {
    self.dir.path().to_path_buf()
  }

  /// Scoped transaction acquisition shared by every operation: begin, run
  /// the unit of work, commit read-write transactions on success. Every
  /// error path drops the transaction unfinished, which the engine treats
  /// as a rollback, so each transaction has exactly one outcome.
  fn with_txn<T>(&self, writable: bool, op: impl FnOnce(&Tx) -> Result<T>) -> Result<T> {
    let txn = self.env.tx(writable).map_err(Errors::from_engine)?;
    let out = op(&txn)?;
    if writable {
      txn.commit().map_err(Errors::from_engine)?;
    }
    Ok(out)
  }
}

impl Storage for Store {
  fn get(&self, key: Bytes) -> Result<Bytes> {
    self.with_txn(false, |txn| {
      let bucket = txn.get_bucket(BUCKET_NAME).map_err(Errors::from_engine)?;
      match bucket.get_kv(key.as_ref()) {
        // Copy the value out before the transaction is released.
        Some(kv) => Ok(Bytes::copy_from_slice(kv.value())),
        None => Err(Errors::KeyNotFound),
      }
    })
  }

  fn set(&self, key: Bytes, value: Bytes) -> Result<()> {
    self.with_txn(true, |txn| {
      let bucket = txn
        .get_or_create_bucket(BUCKET_NAME)
        .map_err(Errors::from_engine)?;
      bucket
        .put(key.to_vec(), value.to_vec())
        .map_err(Errors::from_engine)?;
      Ok(())
    })
  }

  fn del(&self, key: Bytes) -> Result<()> {
    self.with_txn(true, |txn| {
      let bucket = txn.get_bucket(BUCKET_NAME).map_err(Errors::from_engine)?;
      bucket.delete(key.as_ref()).map_err(Errors::from_engine)?;
      Ok(())
    })
  }
}
