// SPDX-License-Identifier: MPL-2.0
//! The three face elements and their enum-keyed storage.
//!
//! Exactly three elements exist. They are keyed by [`ElementKind`] rather
//! than by name so that every table over them is exhaustive at compile time.

use super::geometry::{CenteredBox, Point};
use std::ops::{Index, IndexMut};

/// Identifies one of the three positionable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    EyeLeft,
    EyeRight,
    Mouth,
}

impl ElementKind {
    /// Fixed drawing and hit-test order.
    pub const ALL: [ElementKind; 3] = [ElementKind::EyeLeft, ElementKind::EyeRight, ElementKind::Mouth];

    const fn index(self) -> usize {
        match self {
            ElementKind::EyeLeft => 0,
            ElementKind::EyeRight => 1,
            ElementKind::Mouth => 2,
        }
    }

    /// Stable identifier, used in config keys and diagnostics.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ElementKind::EyeLeft => "eye_left",
            ElementKind::EyeRight => "eye_right",
            ElementKind::Mouth => "mouth",
        }
    }

    /// Localization key of the display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ElementKind::EyeLeft => "element-eye-left",
            ElementKind::EyeRight => "element-eye-right",
            ElementKind::Mouth => "element-mouth",
        }
    }

    /// Placeholder outline color as 8-bit RGB.
    #[must_use]
    pub fn color(self) -> [u8; 3] {
        match self {
            ElementKind::EyeLeft => [0xff, 0x00, 0x00],
            ElementKind::EyeRight => [0x00, 0xff, 0x00],
            ElementKind::Mouth => [0x00, 0x00, 0xff],
        }
    }

    /// Default box for a base image of `width` x `height` pixels.
    ///
    /// Eyes sit on the upper third line at the quarter marks, the mouth on
    /// the lower third line, horizontally centered.
    #[must_use]
    pub fn default_bounds(self, width: u32, height: u32) -> CenteredBox {
        let w = width as f32;
        let h = height as f32;
        match self {
            ElementKind::EyeLeft => CenteredBox::new(Point::new(w / 4.0, h / 3.0), 100.0, 60.0),
            ElementKind::EyeRight => {
                CenteredBox::new(Point::new(w * 3.0 / 4.0, h / 3.0), 100.0, 60.0)
            }
            ElementKind::Mouth => CenteredBox::new(Point::new(w / 2.0, h * 2.0 / 3.0), 120.0, 40.0),
        }
    }
}

/// A positioned element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub bounds: CenteredBox,
}

impl Element {
    #[must_use]
    pub fn with_defaults(kind: ElementKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            bounds: kind.default_bounds(width, height),
        }
    }
}

// =============================================================================
// ElementMap
// =============================================================================

/// Fixed-size table holding one value per [`ElementKind`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementMap<T> {
    slots: [T; 3],
}

impl<T> ElementMap<T> {
    /// Builds a table by calling `f` once per kind, in [`ElementKind::ALL`] order.
    pub fn from_fn(f: impl FnMut(ElementKind) -> T) -> Self {
        Self {
            slots: ElementKind::ALL.map(f),
        }
    }

    /// Iterates over `(kind, value)` pairs in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, &T)> {
        ElementKind::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<ElementKind> for ElementMap<T> {
    type Output = T;

    fn index(&self, kind: ElementKind) -> &T {
        &self.slots[kind.index()]
    }
}

impl<T> IndexMut<ElementKind> for ElementMap<T> {
    fn index_mut(&mut self, kind: ElementKind) -> &mut T {
        &mut self.slots[kind.index()]
    }
}

/// Default layout for all three elements on a `width` x `height` base.
#[must_use]
pub fn default_layout(width: u32, height: u32) -> ElementMap<Element> {
    ElementMap::from_fn(|kind| Element::with_defaults(kind, width, height))
}
