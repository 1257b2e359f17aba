//! Single-slot notification model
//!
//! At most one notification is live at a time. Showing a new one evicts the
//! current one, and dismissal is keyed by id so a stale timer or a second
//! close click cannot remove a newer notification.

/// Auto-dismiss delay in milliseconds
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Background color of the toast
    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A notification currently attached to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Creation time in milliseconds since the epoch
    pub created_at_ms: u64,
    /// When the automatic removal fires
    pub dismiss_at_ms: u64,
}

impl NotificationRecord {
    /// Milliseconds left before automatic removal, zero once overdue
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.dismiss_at_ms.saturating_sub(now_ms)
    }
}

/// The page-wide notification slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<NotificationRecord>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&NotificationRecord> {
        self.current.as_ref()
    }

    /// Replaces whatever is shown and returns the id of the new notification
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.current = Some(NotificationRecord {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
            dismiss_at_ms: now_ms + u64::from(AUTO_DISMISS_MS),
        });

        id
    }

    /// Removes the notification with this id if it is still attached.
    ///
    /// Returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.is_attached(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_attached(&self, id: u64) -> bool {
        self.current.as_ref().is_some_and(|n| n.id == id)
    }
}
