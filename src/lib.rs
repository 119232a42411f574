// SPDX-License-Identifier: MPL-2.0
//! `face_replacer` places eye and mouth overlays on a photo and exports the
//! composited result as PNG, built with the Iced GUI framework.
//!
//! It demonstrates canvas-based hit-testing and handle resizing,
//! internationalization with Fluent, and user preference management.

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
