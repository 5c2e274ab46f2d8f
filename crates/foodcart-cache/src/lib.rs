//! Durable Key-Value store for Foodcart.
//!
//! Provides a simple, ergonomic API for persisting data in a key-value
//! store with automatic JSON serialization. The storage itself is a
//! pluggable [`Backend`]: in memory, a directory of files, or Spin's
//! Key-Value Store when compiled for `wasm32`.
//!
//! # Example
//!
//! ```rust,ignore
//! use foodcart_cache::Cache;
//!
//! let cache = Cache::open_dir("/var/lib/foodcart")?;
//!
//! // Store a value
//! cache.set("cart:session123", &lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<CartLine>> = cache.get("cart:session123")?;
//!
//! // Delete a value
//! cache.delete("cart:session123")?;
//! ```

mod backend;
mod error;
mod kv;

#[cfg(target_arch = "wasm32")]
pub use backend::SpinBackend;
pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, Cache, CacheError, FileBackend, MemoryBackend};
}
