//! Transient user notifications.
//!
//! At most one notification is visible at any time: showing a new one
//! replaces the current one, and each expires on its own after the
//! configured lifetime (5 seconds by default).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Notification severity, mapped to alert styling by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// The page area that renders notifications.
pub trait NotificationArea: Send + Sync {
    /// Render a notification, replacing whatever is currently shown.
    fn show(&self, notification: &Notification);
    /// Remove the currently shown notification, if any.
    fn clear(&self);
}

/// Service owning notification lifecycle.
///
/// Cheaply cloneable; clones share the same display area and expiry state.
#[derive(Clone)]
pub struct NotificationService {
    inner: Arc<NotificationInner>,
}

struct NotificationInner {
    area: Arc<dyn NotificationArea>,
    ttl: Duration,
    /// Bumped on every `notify`; an expiry timer only clears the area when
    /// its generation is still current.
    generation: AtomicU64,
}

impl NotificationService {
    /// Create a service rendering into `area` with the given lifetime.
    #[must_use]
    pub fn new(area: Arc<dyn NotificationArea>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(NotificationInner {
                area,
                ttl,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Show a notification, replacing any visible one. It auto-expires after
    /// the configured lifetime unless replaced first.
    ///
    /// Must be called from within a Tokio runtime: the expiry timer is a
    /// spawned task.
    pub fn notify(&self, notification: Notification) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.area.show(&notification);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.ttl).await;
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner.area.clear();
            }
        });
    }

    /// Show a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification {
            title: "Success".to_string(),
            message: message.into(),
            severity: Severity::Success,
        });
    }

    /// Show an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification {
            title: "Error".to_string(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    /// Show an informational notification.
    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notification {
            title: "Info".to_string(),
            message: message.into(),
            severity: Severity::Info,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingArea {
        current: Mutex<Option<Notification>>,
        shown: Mutex<Vec<Notification>>,
    }

    impl NotificationArea for RecordingArea {
        fn show(&self, notification: &Notification) {
            *self.current.lock().expect("lock") = Some(notification.clone());
            self.shown.lock().expect("lock").push(notification.clone());
        }

        fn clear(&self) {
            *self.current.lock().expect("lock") = None;
        }
    }

    fn service(area: &Arc<RecordingArea>) -> NotificationService {
        NotificationService::new(
            Arc::clone(area) as Arc<dyn NotificationArea>,
            Duration::from_secs(5),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_ttl() {
        let area = Arc::new(RecordingArea::default());
        let notifier = service(&area);

        notifier.success("Cart updated successfully!");
        assert!(area.current.lock().expect("lock").is_some());

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(area.current.lock().expect("lock").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_replaces_previous() {
        let area = Arc::new(RecordingArea::default());
        let notifier = service(&area);

        notifier.success("first");
        tokio::time::sleep(Duration::from_secs(3)).await;
        notifier.error("second");

        // The first notification's timer fires at t=5 but must not clear the
        // replacement shown at t=3.
        tokio::time::sleep(Duration::from_secs(3)).await;
        let current = area.current.lock().expect("lock").clone();
        assert_eq!(current.map(|n| n.message), Some("second".to_string()));

        // The replacement expires on its own schedule.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(area.current.lock().expect("lock").is_none());

        assert_eq!(area.shown.lock().expect("lock").len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_severity_helpers() {
        let area = Arc::new(RecordingArea::default());
        let notifier = service(&area);

        notifier.error("Failed to update cart");
        let current = area.current.lock().expect("lock").clone().expect("shown");
        assert_eq!(current.title, "Error");
        assert_eq!(current.severity, Severity::Error);
    }
}
