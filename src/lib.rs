//! PathKV: a byte-oriented key-value store designed to be served over HTTP.
//!
//! The storage core binds an embedded, ordered, transactional engine to a
//! narrow Get/Set/Del capability set. Every logical operation runs inside
//! its own transaction, which either commits or rolls back on every exit
//! path. The store lives in a private on-disk directory allocated at open
//! time and removed at close time, so its contents never outlive the
//! process that created them.
//!
//! # Features
//!
//! * Atomic single-key reads, writes, and deletes
//! * Single-writer / concurrent-snapshot-reader semantics delegated to the engine
//! * A backend-agnostic `Storage` trait for request handlers to consume
//! * A compact error taxonomy that separates "key absent" from engine failure
//!
//! # Basic Usage
//!
//! ```
//! use bytes::Bytes;
//! use pathkv::{db::Store, storage::Storage};
//!
//! // Open a store rooted at a fresh private directory
//! let store = Store::open().expect("failed to open pathkv store");
//!
//! // Store a key-value pair
//! let key = Bytes::from(b"/hello".to_vec());
//! let value = Bytes::from(b"world".to_vec());
//! store.set(key.clone(), value.clone()).expect("failed to set");
//!
//! // Retrieve the value
//! let retrieved = store.get(key.clone()).expect("failed to get");
//! assert_eq!(retrieved, value);
//!
//! // Delete the key
//! store.del(key).expect("failed to delete");
//!
//! // Release the environment and remove the directory
//! store.close().expect("failed to close");
//! ```

pub mod db;
pub mod errors;
pub mod storage;
