// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed to the editor when no widget captured the
//! key press. Pointer input reaches the editor through its canvas instead.

use super::Message;
use crate::ui::face_editor;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval between ticks while notifications are on screen.
const FAST_TICK: Duration = Duration::from_millis(100);

/// Interval used otherwise, to keep draining diagnostics.
const IDLE_TICK: Duration = Duration::from_secs(1);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) = &event {
            match status {
                event::Status::Ignored => Some(Message::Editor(face_editor::Message::RawEvent(
                    event.clone(),
                ))),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// diagnostics draining.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    let interval = if has_notifications { FAST_TICK } else { IDLE_TICK };
    time::every(interval).map(Message::Tick)
}
