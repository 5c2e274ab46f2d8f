//! The persisted cart store.

use foodcart_cache::Cache;

use crate::cart::event::Listeners;
use crate::cart::{AddOutcome, CartEvent, CartLine, SubscriptionId};
use crate::catalog::CartProduct;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::money::Price;
use crate::notify::{Notification, Notifier, TracingNotifier};

/// Single source of truth for one session's shopping cart.
///
/// The store owns the line list and mirrors it to a [`Cache`] under
/// [`CartConfig::storage_key`]. Every effective mutation rewrites the whole
/// list, then runs the subscribed listeners. A failed write is logged and
/// leaves the in-memory cart as it is; [`is_synced`](Self::is_synced)
/// reports whether the durable copy is current.
///
/// # Example
///
/// ```rust,ignore
/// let mut cart = CartStore::open(Cache::open_dir(data_dir)?, CartConfig::default());
/// cart.add_item(CartProduct::from(&product), 2, "");
/// println!("{} items, {}", cart.total_items(), cart.subtotal());
/// ```
pub struct CartStore {
    cache: Cache,
    config: CartConfig,
    lines: Vec<CartLine>,
    listeners: Listeners,
    notifier: Box<dyn Notifier>,
    synced: bool,
}

impl CartStore {
    /// Load the cart saved under the configured key.
    ///
    /// A missing key gives an empty cart. So does a payload that cannot be
    /// read or parsed; that case is logged and otherwise ignored.
    pub fn open(cache: Cache, config: CartConfig) -> Self {
        let lines = load_lines(&cache, &config.storage_key);
        Self {
            cache,
            config,
            lines,
            listeners: Listeners::default(),
            notifier: Box::new(TracingNotifier),
            synced: true,
        }
    }

    /// Replace the notifier (defaults to [`TracingNotifier`]).
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Add one unit of `product` with no note.
    pub fn add(&mut self, product: impl Into<CartProduct>) -> AddOutcome {
        self.add_item(product, 1, "")
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity grows by
    /// `quantity` and its note is replaced only when `note` is non-empty.
    /// Otherwise a new line is appended. A zero quantity is ignored unless
    /// it changes the note of an existing line.
    pub fn add_item(
        &mut self,
        product: impl Into<CartProduct>,
        quantity: u32,
        note: &str,
    ) -> AddOutcome {
        let product = product.into();

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            if quantity == 0 && (note.is_empty() || line.note == note) {
                tracing::debug!(id = %product.id, "add leaves line unchanged");
                return AddOutcome::Ignored;
            }
            line.quantity = line.quantity.saturating_add(quantity);
            if !note.is_empty() {
                line.note = note.to_string();
            }
            let event = CartEvent::QuantityIncreased {
                id: line.id.clone(),
                added: quantity,
                quantity: line.quantity,
            };
            let message = format!("Updated {} quantity to {}", line.name, line.quantity);
            self.commit(event);
            self.notify(Notification::success(message));
            return AddOutcome::Updated;
        }

        if quantity == 0 {
            tracing::debug!(id = %product.id, "ignoring zero-quantity add");
            return AddOutcome::Ignored;
        }

        let line = CartLine::new(product, quantity, note);
        let event = CartEvent::ItemAdded {
            id: line.id.clone(),
            quantity,
        };
        let message = format!("Added {} to cart", line.name);
        self.lines.push(line);
        self.commit(event);
        self.notify(Notification::success(message));
        AddOutcome::Inserted
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn update_quantity(&mut self, id: impl AsRef<str>, quantity: u32) -> bool {
        let id = id.as_ref();
        if quantity == 0 {
            return self.remove_item(id);
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id.as_str() == id) else {
            return false;
        };
        line.quantity = quantity;
        let event = CartEvent::QuantityChanged {
            id: line.id.clone(),
            quantity,
        };
        self.commit(event);
        true
    }

    /// Remove a line. Returns `false` if the product is not in the cart.
    pub fn remove_item(&mut self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        let Some(index) = self.lines.iter().position(|l| l.id.as_str() == id) else {
            return false;
        };
        let line = self.lines.remove(index);
        self.commit(CartEvent::ItemRemoved { id: line.id });
        self.notify(Notification::success(format!(
            "Removed {} from cart",
            line.name
        )));
        true
    }

    /// Set a line's note verbatim. Returns `false` if the product is not in
    /// the cart.
    pub fn update_note(&mut self, id: impl AsRef<str>, note: impl Into<String>) -> bool {
        let id = id.as_ref();
        let Some(line) = self.lines.iter_mut().find(|l| l.id.as_str() == id) else {
            return false;
        };
        line.note = note.into();
        let event = CartEvent::NoteChanged {
            id: line.id.clone(),
        };
        self.commit(event);
        true
    }

    /// Remove every line. The empty cart is persisted.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.commit(CartEvent::Cleared);
        self.notify(Notification::success("Cart cleared"));
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines. No tax, discount or
    /// shipping is applied.
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_in_cart(&self, id: impl AsRef<str>) -> bool {
        self.line(id).is_some()
    }

    /// Quantity of the product in the cart, 0 if absent.
    pub fn item_quantity(&self, id: impl AsRef<str>) -> u32 {
        self.line(id).map_or(0, |l| l.quantity)
    }

    pub fn line(&self, id: impl AsRef<str>) -> Option<&CartLine> {
        let id = id.as_ref();
        self.lines.iter().find(|l| l.id.as_str() == id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the durable copy matches the in-memory cart.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Write the cart to the durable store now.
    pub fn flush(&mut self) -> Result<(), CartError> {
        self.cache.set(&self.config.storage_key, &self.lines)?;
        self.synced = true;
        Ok(())
    }

    /// Register a listener called after every effective mutation with the
    /// event and the resulting lines.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &[CartLine]) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn commit(&mut self, event: CartEvent) {
        self.persist();
        self.listeners.emit(&event, &self.lines);
    }

    fn persist(&mut self) {
        match self.cache.set(&self.config.storage_key, &self.lines) {
            Ok(()) => {
                self.synced = true;
                tracing::debug!(
                    key = %self.config.storage_key,
                    lines = self.lines.len(),
                    "cart persisted"
                );
            }
            Err(e) => {
                self.synced = false;
                tracing::error!(
                    key = %self.config.storage_key,
                    error = %e,
                    "failed to persist cart"
                );
                self.notify(Notification::error(
                    "Could not save your cart. Changes are kept for this session.",
                ));
            }
        }
    }

    fn notify(&self, notification: Notification) {
        if self.config.notifications {
            self.notifier.notify(&notification);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("config", &self.config)
            .field("lines", &self.lines)
            .field("listeners", &self.listeners)
            .field("synced", &self.synced)
            .finish_non_exhaustive()
    }
}

fn load_lines(cache: &Cache, key: &str) -> Vec<CartLine> {
    match cache.get::<Vec<CartLine>>(key) {
        Ok(Some(lines)) => normalize(lines),
        Ok(None) => {
            tracing::debug!(key, "no saved cart");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable saved cart");
            Vec::new()
        }
    }
}

/// Fold duplicate ids into their first line and drop empty lines.
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut out: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 {
            continue;
        }
        match out.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            }
            None => out.push(line),
        }
    }
    out
}
