//! Toast notification for the page
//!
//! A single bottom-right toast reporting the outcome of a form action. Showing
//! a new one replaces the current one; each closes itself after five seconds.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::core::AUTO_DISMISS_MS;
use crate::core::{NotificationSlot, Severity};

/// Notification toast component
/// Place this once at the application root
#[component]
pub fn NotificationToast(
    /// The page-wide notification center
    center: NotificationCenter,
) -> impl IntoView {
    move || {
        center.slot().get().current().cloned().map(|record| {
            let id = record.id;
            let class = format!("notification notification-{}", record.severity.as_str());
            let style = format!("background-color: {};", record.severity.background());

            view! {
                <div class=class style=style role="status" aria-live="polite">
                    <span>{record.message}</span>
                    <button
                        type="button"
                        class="notification-close"
                        aria-label="Dismiss notification"
                        on:click=move |_| center.dismiss(id)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Owns the single notification slot and its dismiss timers
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    slot: RwSignal<NotificationSlot>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
        }
    }

    /// Get the slot signal for rendering
    pub fn slot(&self) -> RwSignal<NotificationSlot> {
        self.slot
    }

    /// Show a notification, evicting the current one.
    ///
    /// Returns the id of the new notification, `None` if the center was
    /// already disposed.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<u64> {
        let message = message.into();
        let now = now_ms();
        let (id, delay_ms) = self.slot.try_update(|slot| {
            let id = slot.show(message, severity, now);
            let delay_ms = slot.current().map_or(0, |record| record.remaining_ms(now));
            (id, delay_ms)
        })?;

        self.schedule_dismiss(id, delay_ms);
        Some(id)
    }

    fn schedule_dismiss(&self, _id: u64, _delay_ms: u64) {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            let center = *self;
            let delay_ms = u32::try_from(_delay_ms).unwrap_or(AUTO_DISMISS_MS);
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                center.dismiss(_id);
            });
        }
    }

    /// Remove the notification if it is still the one shown
    pub fn dismiss(&self, id: u64) {
        self.slot.maybe_update(|slot| slot.dismiss(id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::core::AUTO_DISMISS_MS;

    fn shown(center: &NotificationCenter) -> Option<(u64, String)> {
        center
            .slot()
            .get_untracked()
            .current()
            .map(|record| (record.id, record.message.clone()))
    }

    #[test]
    fn test_new_notification_replaces_current() {
        let owner = Owner::new();
        owner.with(|| {
            let center = NotificationCenter::new();

            let first = center.notify("Please fix the errors in the form", Severity::Error);
            let second = center.notify("Message sent successfully! 🚀", Severity::Success);

            let (first, second) = (first.unwrap(), second.unwrap());
            assert_ne!(first, second);
            assert_eq!(
                shown(&center),
                Some((second, "Message sent successfully! 🚀".to_string()))
            );
        });
    }

    #[test]
    fn test_dismiss_is_keyed_and_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let center = NotificationCenter::new();
            let old = center.notify("old", Severity::Error).unwrap();
            let current = center.notify("current", Severity::Success).unwrap();

            // the evicted notification's timer must not remove the newer one
            center.dismiss(old);
            assert_eq!(shown(&center), Some((current, "current".to_string())));

            center.dismiss(current);
            assert_eq!(shown(&center), None);
            center.dismiss(current);
            assert_eq!(shown(&center), None);
        });
    }

    #[test]
    fn test_deadline_matches_auto_dismiss_delay() {
        let owner = Owner::new();
        owner.with(|| {
            let center = NotificationCenter::new();
            center.notify("hello", Severity::Success);

            let record = center.slot().get_untracked().current().cloned().unwrap();
            assert_eq!(
                record.remaining_ms(record.created_at_ms),
                u64::from(AUTO_DISMISS_MS)
            );
        });
    }
}
