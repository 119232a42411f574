// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use crate::ui::face_editor::{CanvasMessage, Event, Interaction, SidebarMessage, State};
use iced::keyboard;

impl State {
    pub(crate) fn handle_sidebar_message(&mut self, message: SidebarMessage) -> Event {
        match message {
            SidebarMessage::OpenBaseImage => Event::OpenBaseImageRequested,
            SidebarMessage::OpenOverlay(kind) => Event::OpenOverlayRequested(kind),
            SidebarMessage::StartProcessing => {
                if self.start_processing() {
                    Event::ProcessingStarted
                } else {
                    Event::None
                }
            }
            SidebarMessage::Reset => self.reset_event(),
            SidebarMessage::Export => self.export_event(),
            SidebarMessage::SaveDiagnostics => Event::DiagnosticsExportRequested,
        }
    }

    pub(crate) fn handle_canvas_message(&mut self, message: CanvasMessage) -> Event {
        match message {
            CanvasMessage::PointerDown(point) => self.pointer_down(point),
            CanvasMessage::PointerMoved(point) => {
                self.pointer_moved(point);
                Event::None
            }
            CanvasMessage::PointerUp | CanvasMessage::PointerLeft => {
                self.pointer_released();
                Event::None
            }
        }
    }

    pub(crate) fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => self.handle_key(key),
            _ => Event::None,
        }
    }

    /// Keyboard shortcuts: `S` exports, `R` resets, `Escape` deselects.
    /// All of them are inert until editing has started.
    pub(crate) fn handle_key(&mut self, key: &keyboard::Key) -> Event {
        if !self.processed {
            return Event::None;
        }

        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.interaction = Interaction::Idle;
                self.select(None)
            }
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case("s") => self.export_event(),
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case("r") => self.reset_event(),
            _ => Event::None,
        }
    }

    fn reset_event(&mut self) -> Event {
        if self.reset() {
            Event::ElementsReset
        } else {
            Event::None
        }
    }

    fn export_event(&self) -> Event {
        if self.processed {
            Event::ExportRequested
        } else {
            Event::None
        }
    }
}
