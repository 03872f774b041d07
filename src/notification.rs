//! Diagnostics collected while reading and rendering.
//!
//! Malformed or unsupported input never aborts a conversion: the component
//! that meets it records a [`Notification`] in the caller's
//! [`NotificationCollection`] and carries on. The collection is passed
//! explicitly to each stage, so there is no process-wide logger state.
//!
//! Every recorded notification is also emitted as a `tracing` event, so a
//! binary that installs a subscriber sees them as log lines.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An entity/section is recognised but not implemented.
    NotImplemented,
    /// Feature exists but is not supported in this context.
    NotSupported,
    /// Non-fatal warning (e.g., unknown entity type, invalid color index).
    Warning,
    /// Error that was recovered from (e.g., orphan VERTEX, missing block).
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during reading or rendering.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a pipeline run.
///
/// When `verbose` is off only errors are kept.
#[derive(Debug, Clone)]
pub struct NotificationCollection {
    items: Vec<Notification>,
    verbose: bool,
}

impl Default for NotificationCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCollection {
    /// Create an empty, verbose collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            verbose: true,
        }
    }

    /// Create an empty collection that only keeps errors.
    pub fn errors_only() -> Self {
        Self {
            items: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let message = message.into();
        match notification_type {
            NotificationType::Error => tracing::error!("{}", message),
            NotificationType::Warning => tracing::warn!("{}", message),
            NotificationType::NotImplemented | NotificationType::NotSupported => {
                tracing::debug!(kind = %notification_type, "{}", message)
            }
        }
        if self.verbose || notification_type == NotificationType::Error {
            self.items.push(Notification::new(notification_type, message));
        }
    }

    /// Shorthand for a [`NotificationType::Warning`].
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(NotificationType::Warning, message);
    }

    /// Shorthand for a [`NotificationType::Error`].
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationType::Error, message);
    }

    /// Move every notification of `other` into this collection.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Whether any notification message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.items.iter().any(|n| n.message.contains(needle))
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationType::Warning, "unsupported type in ENTITIES section: FOO");
        assert_eq!(n.notification_type, NotificationType::Warning);
        assert_eq!(n.to_string(), "[Warning] unsupported type in ENTITIES section: FOO");
    }

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.warn("w1");
        c.error("e1");
        c.notify(NotificationType::Warning, "w2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 2);
        assert!(c.has_type(NotificationType::Error));
        assert!(!c.has_type(NotificationType::NotImplemented));
        assert!(c.mentions("e1"));
    }

    #[test]
    fn test_errors_only_drops_warnings() {
        let mut c = NotificationCollection::errors_only();
        c.warn("quiet");
        c.notify(NotificationType::NotSupported, "quiet too");
        c.error("loud");
        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().unwrap().message, "loud");
    }

    #[test]
    fn test_extend_and_into_iter() {
        let mut a = NotificationCollection::new();
        let mut b = NotificationCollection::new();
        a.warn("a");
        b.error("b");
        a.extend(b);
        let messages: Vec<String> = a.into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
