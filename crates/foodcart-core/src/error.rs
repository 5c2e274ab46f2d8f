//! Cart error types.

use thiserror::Error;

/// Errors surfaced by the cart layer.
///
/// Missing items never produce an error; they are no-ops. Only storage
/// and configuration problems do.
#[derive(Error, Debug)]
pub enum CartError {
    /// The durable store rejected a read or write.
    #[error("Cart storage error: {0}")]
    Storage(#[from] foodcart_cache::CacheError),

    /// Configuration could not be parsed.
    #[error("Invalid cart configuration: {0}")]
    Config(#[from] toml::de::Error),
}
