//! Shopping cart for the Foodcart storefront.
//!
//! - **Catalog**: the product record the catalog API returns
//! - **Cart**: cart lines and [`CartStore`], which persists the cart to a
//!   durable key-value store after every change and notifies listeners
//! - **Notifications**: confirmation messages for add/remove/clear
//!
//! # Example
//!
//! ```rust,ignore
//! use foodcart_core::prelude::*;
//! use foodcart_cache::Cache;
//!
//! let mut cart = CartStore::open(Cache::open_dir(data_dir)?, CartConfig::default());
//! cart.subscribe(|event, lines| redraw(event, lines));
//!
//! let pho = CartProduct::new("a", "Phở", Price::new(50_000));
//! cart.add_item(pho.clone(), 1, "");
//! cart.add_item(pho, 2, "no onions");
//!
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.subtotal(), Price::new(150_000));
//! ```

pub mod catalog;
pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub use cart::CartStore;
pub use config::CartConfig;
pub use error::CartError;
pub use ids::{CategoryId, ProductId};
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{AddOutcome, CartEvent, CartLine, CartStore, SubscriptionId};
    pub use crate::catalog::{CartProduct, Product};
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::Price;
    pub use crate::notify::{
        Notification, NotificationLevel, Notifier, NullNotifier, TracingNotifier,
    };
}
