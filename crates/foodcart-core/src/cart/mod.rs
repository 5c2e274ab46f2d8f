//! Shopping cart module.
//!
//! Contains the cart line type, change events and the persisted store.

mod event;
mod line;
mod store;

pub use event::{AddOutcome, CartEvent, SubscriptionId};
pub use line::CartLine;
pub use store::CartStore;
