// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern: the
//! editor owns its state, emits messages from its widgets and reports side
//! effects to the application as events.
//!
//! # Screens
//!
//! - [`face_editor`] - Base image canvas with the eye and mouth overlays
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod face_editor;
pub mod notifications;
pub mod theme;
pub mod theming;
