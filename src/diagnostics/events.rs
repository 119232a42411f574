// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A base image was loaded (file dialog or CLI).
    LoadBaseImage {
        width: u32,
        height: u32,
    },

    /// An overlay image was assigned to an element.
    LoadOverlay {
        /// Element identifier (`eye_left`, `eye_right`, `mouth`).
        element: String,
    },

    /// Editing started; elements are placed at their defaults.
    StartProcessing,

    /// All elements returned to their default geometry.
    ResetElements,

    /// An element was selected on the canvas.
    SelectElement {
        element: String,
    },

    /// The selection was cleared.
    ClearSelection,

    /// The composited image was exported.
    ExportImage,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        /// Optional details, such as the file format of a loaded image.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Non-critical issue, such as a corrupt settings file.
    Warning { message: String },

    /// Failed operation, such as an undecodable image.
    Error { message: String },
}
