// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::element::ElementKind;
use crate::domain::geometry::Point;

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    OpenBaseImage,
    OpenOverlay(ElementKind),
    StartProcessing,
    Reset,
    Export,
    SaveDiagnostics,
}

/// Canvas interaction messages, in image pixel coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    PointerDown(Point),
    PointerMoved(Point),
    PointerUp,
    /// Cursor left the canvas area
    PointerLeft,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(SidebarMessage),
    Canvas(CanvasMessage),
    /// Raw event for keyboard shortcuts
    RawEvent(iced::Event),
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Request to pick a base image
    OpenBaseImageRequested,
    /// Request to pick the overlay image of an element
    OpenOverlayRequested(ElementKind),
    /// Elements were placed at their defaults and editing is enabled
    ProcessingStarted,
    /// Elements returned to their default geometry
    ElementsReset,
    /// The selection changed to the given element, or was cleared
    SelectionChanged(Option<ElementKind>),
    /// Request to composite and save the result
    ExportRequested,
    /// Request to save the diagnostics report
    DiagnosticsExportRequested,
}
