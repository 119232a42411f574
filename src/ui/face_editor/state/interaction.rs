// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction: selection, drag-to-move and handle resize.
//!
//! Pointer positions arrive already mapped to image pixels. Every move
//! applies the delta since the previous pointer position and then re-anchors,
//! so drags and resizes are incremental.

use crate::domain::element::ElementKind;
use crate::domain::geometry::{Handle, Point, HANDLE_HIT_RADIUS};
use crate::ui::face_editor::{Event, State};

/// The pointer interaction in progress. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        anchor: Point,
    },
    Resizing {
        handle: Handle,
        anchor: Point,
    },
}

/// Mouse cursor to show while hovering the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Over a handle of the selected element
    Pointer,
    /// Over an element body
    Move,
}

/// What lies under the pointer, in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hit {
    Handle(Handle),
    Element(ElementKind),
    Empty,
}

impl State {
    /// Handle of the selected element within grab range of `point`.
    pub(crate) fn handle_at(&self, point: Point) -> Option<Handle> {
        let kind = self.selected?;
        self.elements[kind].bounds.handle_at(point, HANDLE_HIT_RADIUS)
    }

    /// First element, in fixed order, whose box contains `point`.
    pub(crate) fn element_at(&self, point: Point) -> Option<ElementKind> {
        self.elements
            .iter()
            .find(|(_, element)| element.bounds.contains(point))
            .map(|(kind, _)| kind)
    }

    pub(crate) fn hit_test(&self, point: Point) -> Hit {
        if let Some(handle) = self.handle_at(point) {
            Hit::Handle(handle)
        } else if let Some(kind) = self.element_at(point) {
            Hit::Element(kind)
        } else {
            Hit::Empty
        }
    }

    pub(crate) fn pointer_down(&mut self, point: Point) -> Event {
        if !self.processed {
            return Event::None;
        }

        match self.hit_test(point) {
            Hit::Handle(handle) => {
                self.interaction = Interaction::Resizing {
                    handle,
                    anchor: point,
                };
                Event::None
            }
            Hit::Element(kind) => {
                self.interaction = Interaction::Dragging { anchor: point };
                self.select(Some(kind))
            }
            Hit::Empty => {
                self.interaction = Interaction::Idle;
                self.select(None)
            }
        }
    }

    pub(crate) fn pointer_moved(&mut self, point: Point) {
        if !self.processed {
            return;
        }
        let Some(kind) = self.selected else {
            return;
        };

        let bounds = &mut self.elements[kind].bounds;
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging { anchor } => {
                bounds.translate(point.delta_from(anchor));
                self.interaction = Interaction::Dragging { anchor: point };
            }
            Interaction::Resizing { handle, anchor } => {
                bounds.resize(handle, point.delta_from(anchor));
                self.interaction = Interaction::Resizing {
                    handle,
                    anchor: point,
                };
            }
        }
    }

    /// Ends any drag or resize.
    pub(crate) fn pointer_released(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Cursor to show at `point`. Only meaningful while idle.
    #[must_use]
    pub fn cursor_hint(&self, point: Point) -> CursorHint {
        if !self.processed {
            return CursorHint::Default;
        }
        match self.interaction {
            Interaction::Dragging { .. } => CursorHint::Move,
            Interaction::Resizing { .. } => CursorHint::Pointer,
            Interaction::Idle => match self.hit_test(point) {
                Hit::Handle(_) => CursorHint::Pointer,
                Hit::Element(_) => CursorHint::Move,
                Hit::Empty => CursorHint::Default,
            },
        }
    }

    /// Sets the selection, reporting a change to the parent.
    pub(crate) fn select(&mut self, kind: Option<ElementKind>) -> Event {
        if self.selected == kind {
            return Event::None;
        }
        self.selected = kind;
        Event::SelectionChanged(kind)
    }
}
