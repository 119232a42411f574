// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::element::ElementKind;
use crate::error::Error;
use crate::media::{ImageData, RenderedExport};
use crate::ui::face_editor;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(face_editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the base image open dialog.
    BaseImageDialogResult(Option<PathBuf>),
    /// Result from an overlay open dialog.
    OverlayDialogResult {
        kind: ElementKind,
        path: Option<PathBuf>,
    },
    BaseImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    OverlayLoaded {
        kind: ElementKind,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// The composited image is ready to be written.
    ExportRendered(Result<RenderedExport, Error>),
    /// Result from the export save dialog.
    ExportDialogResult(Option<PathBuf>),
    ExportSaved {
        path: PathBuf,
        result: Result<(), Error>,
    },
    /// Result from the diagnostics report save dialog.
    DiagnosticsDialogResult(Option<PathBuf>),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FACE_REPLACER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional base image to load on startup.
    pub base_image: Option<String>,
    /// Overlay paths that take precedence over the configured presets.
    pub eye_left: Option<String>,
    pub eye_right: Option<String>,
    pub mouth: Option<String>,
}

impl Flags {
    /// Overlay path given on the command line for `kind`.
    pub fn overlay(&self, kind: ElementKind) -> Option<&str> {
        match kind {
            ElementKind::EyeLeft => self.eye_left.as_deref(),
            ElementKind::EyeRight => self.eye_right.as_deref(),
            ElementKind::Mouth => self.mouth.as_deref(),
        }
    }
}
