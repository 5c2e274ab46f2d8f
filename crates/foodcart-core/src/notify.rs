//! User-facing confirmation messages emitted by the cart.
//!
//! How a message is shown (toast, terminal line, nothing) is up to the
//! [`Notifier`] the store is given.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A human-readable message about a cart change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Receives notifications from a cart store.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Forwards notifications to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::error!(text = %notification.message, "cart notification")
            }
            NotificationLevel::Success => tracing::info!(
                level = %notification.level,
                text = %notification.message,
                "cart notification"
            ),
        }
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Notification::success("a").level, NotificationLevel::Success);
        assert_eq!(Notification::error("c").level, NotificationLevel::Error);
    }

    #[test]
    fn test_closure_is_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: &Notification| seen.borrow_mut().push(n.message.clone());
        notifier.notify(&Notification::success("Added Phở to cart"));
        assert_eq!(seen.into_inner(), vec!["Added Phở to cart".to_string()]);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationLevel::Success).unwrap();
        assert_eq!(json, r#""success""#);
    }
}
