// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report load failures, export results
//! and configuration problems without blocking interaction.
//!
//! # Components
//!
//! - [`Notification`] - Message key, arguments and severity
//! - [`Manager`] - Queuing and lifecycle management
//! - [`Toast`] - Rendering of the visible notifications
//!
//! Success and info toasts close after 3s, warnings after 5s, errors stay
//! until dismissed. At most three toasts are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
