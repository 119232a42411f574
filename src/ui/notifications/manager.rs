// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts, queues the rest and
//! runs the auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Key prefix shared by all load failure notifications.
const LOAD_ERROR_KEY: &str = "notification-load-error";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle used to record warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a new notification, queueing it when [`MAX_VISIBLE`] are shown.
    ///
    /// Warnings and errors are also recorded as diagnostic events.
    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            let message = match notification.detail() {
                Some(detail) => format!("{}: {}", notification.message_key(), detail),
                None => notification.message_key().to_string(),
            };
            match notification.severity() {
                Severity::Warning => handle.log_warning(message),
                Severity::Error => handle.log_error(message),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses any visible notification whose timer has expired.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale load failures once an image loads successfully.
    pub fn clear_load_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.message_key() != LOAD_ERROR_KEY);
        self.queue.retain(|n| n.message_key() != LOAD_ERROR_KEY);

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}
