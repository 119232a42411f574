// SPDX-License-Identifier: MPL-2.0
//! Face editor: places the eye and mouth overlays on a base image.
//!
//! The editor owns every piece of editing state and exposes a single
//! [`State::update`] entry point. Side effects (file dialogs, decoding,
//! export) are requested from the parent through [`Event`]s.

mod messages;
pub mod overlay;
pub mod scene;
pub mod state;
mod view;

#[cfg(test)]
mod tests;

pub use messages::{CanvasMessage, Event, Message, SidebarMessage};
pub use state::Interaction;

use crate::app::i18n::fluent::I18n;
use crate::domain::element::{default_layout, Element, ElementKind, ElementMap};
use crate::media::{Composition, ImageData, Layer};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Local UI state for the editor screen.
#[derive(Clone)]
pub struct State {
    /// Image the elements are placed on
    base: Option<ImageData>,
    /// Overlay assigned to each element; survives resets and base changes
    overlays: ElementMap<Option<ImageData>>,
    elements: ElementMap<Element>,
    selected: Option<ElementKind>,
    interaction: Interaction,
    /// Whether editing has started for the current base image
    processed: bool,
    /// Last exported result, shown in the sidebar
    preview: Option<ImageData>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            base: None,
            overlays: ElementMap::default(),
            elements: default_layout(0, 0),
            selected: None,
            interaction: Interaction::Idle,
            processed: false,
            preview: None,
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("base", &self.base.as_ref().map(|b| (b.width, b.height)))
            .field("elements", &self.elements)
            .field("selected", &self.selected)
            .field("interaction", &self.interaction)
            .field("processed", &self.processed)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
            Message::Canvas(msg) => self.handle_canvas_message(msg),
            Message::RawEvent(event) => self.handle_raw_event(&event),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        view::render(self, ctx)
    }

    /// Replaces the base image.
    ///
    /// Editing stops and the elements go back to the defaults of the new
    /// size. Overlay assignments are kept.
    pub fn set_base_image(&mut self, image: ImageData) {
        self.elements = default_layout(image.width, image.height);
        self.base = Some(image);
        self.processed = false;
        self.selected = None;
        self.interaction = Interaction::Idle;
        self.preview = None;
    }

    /// Assigns `image` as the overlay of `kind`, replacing any previous one.
    pub fn set_overlay(&mut self, kind: ElementKind, image: ImageData) {
        self.overlays[kind] = Some(image);
    }

    pub fn set_preview(&mut self, image: ImageData) {
        self.preview = Some(image);
    }

    /// Places the elements at their defaults and enables editing.
    ///
    /// Returns `false` when no base image is loaded.
    pub fn start_processing(&mut self) -> bool {
        let Some(base) = &self.base else {
            return false;
        };
        self.elements = default_layout(base.width, base.height);
        self.processed = true;
        self.selected = None;
        self.interaction = Interaction::Idle;
        true
    }

    /// Restores the default geometry and clears the selection.
    ///
    /// Returns `false` if editing has not started.
    pub fn reset(&mut self) -> bool {
        if !self.processed {
            return false;
        }
        if let Some(base) = &self.base {
            self.elements = default_layout(base.width, base.height);
        }
        self.selected = None;
        self.interaction = Interaction::Idle;
        true
    }

    /// Snapshot of everything the exporter needs, or `None` before editing
    /// has started.
    #[must_use]
    pub fn composition(&self) -> Option<Composition> {
        if !self.processed {
            return None;
        }
        let base = self.base.clone()?;
        let layers = self
            .elements
            .iter()
            .filter_map(|(kind, element)| {
                self.overlays[kind].as_ref().map(|image| Layer {
                    image: image.clone(),
                    bounds: element.bounds,
                })
            })
            .collect();
        Some(Composition { base, layers })
    }

    pub fn base_image(&self) -> Option<&ImageData> {
        self.base.as_ref()
    }

    pub fn overlay(&self, kind: ElementKind) -> Option<&ImageData> {
        self.overlays[kind].as_ref()
    }

    pub fn elements(&self) -> &ElementMap<Element> {
        &self.elements
    }

    pub fn element(&self, kind: ElementKind) -> &Element {
        &self.elements[kind]
    }

    pub fn selected(&self) -> Option<ElementKind> {
        self.selected
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }
}
