//! Transient notifications
//!
//! At most one toast exists at a time. Showing a new one replaces the
//! current toast and restarts its timer. Expiry is driven by [`ToastManager::tick`],
//! called once per frame from the event loop.

use crate::constants::{TOAST_HIDE_MS, TOAST_VISIBLE_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✔",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Final stretch before removal, rendered dimmed
    Hiding,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub phase: ToastPhase,
    shown_at: Instant,
}

pub struct ToastManager {
    current: Option<Toast>,
    visible_for: Duration,
    hide_for: Duration,
    /// Total toasts shown, including replaced ones
    shown: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::with_durations(
            Duration::from_millis(TOAST_VISIBLE_MS),
            Duration::from_millis(TOAST_HIDE_MS),
        )
    }

    pub fn with_durations(visible_for: Duration, hide_for: Duration) -> Self {
        ToastManager {
            current: None,
            visible_for,
            hide_for,
            shown: 0,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn shown_count(&self) -> usize {
        self.shown
    }

    pub fn show(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.show_at(message, level, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        let message = message.into();
        if let Some(previous) = &self.current {
            tracing::debug!("Replacing toast '{}'", previous.message);
        }
        tracing::debug!("Showing {:?} toast: {}", level, message);
        self.shown += 1;

        self.current = Some(Toast {
            message,
            level,
            phase: ToastPhase::Visible,
            shown_at: now,
        });
    }

    /// Advance the toast timer to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = &mut self.current else {
            return;
        };

        let elapsed = now.saturating_duration_since(toast.shown_at);
        if elapsed >= self.visible_for + self.hide_for {
            tracing::debug!("Toast expired: {}", toast.message);
            self.current = None;
        } else if elapsed >= self.visible_for {
            toast.phase = ToastPhase::Hiding;
        }
    }

    pub fn dismiss(&mut self) {
        if let Some(toast) = self.current.take() {
            tracing::debug!("Toast dismissed: {}", toast.message);
        }
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_show_sets_current() {
        let mut toasts = ToastManager::new();
        assert!(toasts.current().is_none());

        toasts.show("Hello", ToastLevel::Success);
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "Hello");
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.phase, ToastPhase::Visible);
    }

    #[test]
    fn test_toast_hides_then_expires() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.show_at("Bye", ToastLevel::Warning, start);

        toasts.tick(start + ms(2999));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Visible);

        toasts.tick(start + ms(3000));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Hiding);

        toasts.tick(start + ms(3400));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_and_restarts_timer() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.show_at("First", ToastLevel::Success, start);
        toasts.show_at("Second", ToastLevel::Error, start + ms(2500));

        // The first toast's deadline no longer applies
        toasts.tick(start + ms(3500));
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "Second");
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.phase, ToastPhase::Visible);

        toasts.tick(start + ms(5900));
        assert!(toasts.current().is_none());
        assert_eq!(toasts.shown_count(), 2);
    }

    #[test]
    fn test_replacing_hiding_toast_makes_it_visible_again() {
        let start = Instant::now();
        let mut toasts = ToastManager::with_durations(ms(100), ms(50));
        toasts.show_at("First", ToastLevel::Success, start);
        toasts.tick(start + ms(120));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Hiding);

        toasts.show_at("Second", ToastLevel::Success, start + ms(130));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Visible);
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = ToastManager::new();
        toasts.show("Gone", ToastLevel::Error);
        toasts.dismiss();
        assert!(toasts.current().is_none());
    }
}
