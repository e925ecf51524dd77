//! Transient success/error banners.
//!
//! At most one notification is visible. Posting replaces the current one and
//! cancels its pending expiry; each notification disappears on its own after
//! a per-kind lifetime unless replaced or cleared first.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;

/// Lifetime of a success notification
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
/// Lifetime of an error notification
pub const ERROR_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

/// How long each kind of notification stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub success: Duration,
    pub error: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            success: SUCCESS_TTL,
            error: ERROR_TTL,
        }
    }
}

impl NotificationTimings {
    fn ttl(&self, kind: NotificationKind) -> Duration {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
        }
    }
}

/// Single-slot notification channel.
///
/// Expiry is delivered back to the app as [`AppMessage::NotificationExpired`]
/// carrying the id of the notification it was scheduled for, so a timer that
/// fires after its notification was replaced is a no-op.
#[derive(Debug)]
pub struct NotificationChannel {
    current: Option<(u64, Notification)>,
    next_id: u64,
    expiry: Option<JoinHandle<()>>,
    timings: NotificationTimings,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl NotificationChannel {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self::with_timings(message_tx, NotificationTimings::default())
    }

    pub fn with_timings(
        message_tx: mpsc::UnboundedSender<AppMessage>,
        timings: NotificationTimings,
    ) -> Self {
        Self {
            current: None,
            next_id: 0,
            expiry: None,
            timings,
            message_tx,
        }
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }

    /// Id of the visible notification, if any.
    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// Replace the visible notification and schedule its expiry.
    pub fn post(&mut self, notification: Notification) -> u64 {
        self.cancel_expiry();

        self.next_id += 1;
        let id = self.next_id;
        let ttl = self.timings.ttl(notification.kind);
        tracing::debug!("Posting {:?} notification {}", notification.kind, id);
        self.current = Some((id, notification));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.message_tx.clone();
                self.expiry = Some(handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    let _ = tx.send(AppMessage::NotificationExpired(id));
                }));
            }
            Err(_) => {
                tracing::warn!("No runtime available, notification {} will not expire", id);
            }
        }
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.post(Notification::success(text))
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.post(Notification::error(text))
    }

    /// Handle an expiry timer firing for `id`.
    ///
    /// Returns true if the visible notification was removed.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current_id() == Some(id) {
            self.current = None;
            self.expiry = None;
            true
        } else {
            false
        }
    }

    /// Remove the visible notification immediately.
    pub fn clear(&mut self) {
        self.cancel_expiry();
        self.current = None;
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        self.cancel_expiry();
    }
}
