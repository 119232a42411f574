// SPDX-License-Identifier: MPL-2.0
//! Editor scene rendering.
//!
//! [`render`] walks the editor state and issues drawing commands against a
//! [`Surface`] in image pixel coordinates. The interactive canvas implements
//! the surface over an iced frame; tests record the commands instead.

use crate::domain::element::ElementKind;
use crate::domain::geometry::{CenteredBox, Point};
use crate::media::ImageData;
use crate::ui::design_tokens::canvas as tokens;
use crate::ui::face_editor::State;
use iced::Color;

/// Axis-aligned rectangle in image pixels, described by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<CenteredBox> for Rect {
    fn from(bounds: CenteredBox) -> Self {
        Self::new(bounds.left(), bounds.top(), bounds.width, bounds.height)
    }
}

/// Drawing target of the editor scene.
///
/// Positions and rectangles are in image pixels. Stroke widths, dash
/// lengths and marker radii are in display pixels.
pub trait Surface {
    fn clear(&mut self);
    fn draw_image(&mut self, image: &ImageData, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, dash: Option<&[f32]>);
    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, stroke: Color);
    /// Draws `text` with its bottom-left corner at `position`.
    fn draw_label(&mut self, text: &str, position: Point, color: Color);
}

/// Converts an element's 8-bit RGB color for drawing.
#[must_use]
pub fn element_color(kind: ElementKind) -> Color {
    let [r, g, b] = kind.color();
    Color::from_rgb8(r, g, b)
}

/// Redraws the whole scene.
///
/// Draws the base image, then, once editing has started, each element
/// (overlay or dashed placeholder) with its label, then the selection
/// decoration. `label` maps an element to its display name.
pub fn render<S, F>(state: &State, surface: &mut S, label: F)
where
    S: Surface + ?Sized,
    F: Fn(ElementKind) -> String,
{
    surface.clear();

    let Some(base) = state.base_image() else {
        return;
    };
    #[allow(clippy::cast_precision_loss)]
    let base_rect = Rect::new(0.0, 0.0, base.width as f32, base.height as f32);
    surface.draw_image(base, base_rect);

    if !state.is_processed() {
        return;
    }

    for (kind, element) in state.elements().iter() {
        let rect = Rect::from(element.bounds);
        let color = element_color(kind);

        match state.overlay(kind) {
            Some(overlay) => surface.draw_image(overlay, rect),
            None => surface.stroke_rect(rect, color, tokens::OUTLINE_WIDTH, Some(&tokens::DASH)),
        }

        surface.draw_label(
            &label(kind),
            Point::new(rect.x, rect.y - tokens::LABEL_OFFSET),
            color,
        );
    }

    if let Some(kind) = state.selected() {
        let bounds = state.element(kind).bounds;
        surface.stroke_rect(
            Rect::from(bounds),
            tokens::SELECTION,
            tokens::OUTLINE_WIDTH,
            Some(&tokens::DASH),
        );
        for (_, position) in bounds.handles() {
            surface.draw_circle(
                position,
                tokens::HANDLE_MARKER_RADIUS,
                tokens::HANDLE_FILL,
                tokens::SELECTION,
            );
        }
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Contain-fit placement of the base image inside the canvas widget.
///
/// The image is scaled uniformly to fit the widget and centered on the
/// remaining axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Display pixels per image pixel
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Fits an `image_width` x `image_height` image into a widget of the
    /// given size. Returns `None` if either size is empty.
    #[must_use]
    pub fn fit(image_width: u32, image_height: u32, bounds: iced::Size) -> Option<Self> {
        if image_width == 0 || image_height == 0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (image_width as f32, image_height as f32);
        let scale = (bounds.width / w).min(bounds.height / h);
        Some(Self {
            scale,
            offset_x: (bounds.width - w * scale) / 2.0,
            offset_y: (bounds.height - h * scale) / 2.0,
        })
    }

    /// Maps a widget-local position to image pixels.
    ///
    /// Positions outside the displayed image map outside the image range;
    /// they are not clamped.
    #[must_use]
    pub fn to_image(&self, position: iced::Point) -> Point {
        Point::new(
            (position.x - self.offset_x) / self.scale,
            (position.y - self.offset_y) / self.scale,
        )
    }

    /// Maps image pixels to a widget-local position.
    #[must_use]
    pub fn to_screen(&self, point: Point) -> iced::Point {
        iced::Point::new(
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }

    #[must_use]
    pub fn rect_to_screen(&self, rect: Rect) -> iced::Rectangle {
        let top_left = self.to_screen(Point::new(rect.x, rect.y));
        iced::Rectangle::new(
            top_left,
            iced::Size::new(rect.width * self.scale, rect.height * self.scale),
        )
    }
}

// =============================================================================
// RecordingSurface
// =============================================================================

/// A drawing command captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear,
    Image {
        size: (u32, u32),
        rect: Rect,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
        dashed: bool,
    },
    Circle {
        center: Point,
        radius: f32,
    },
    Label {
        text: String,
        position: Point,
        color: Color,
    },
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(Command::Clear);
    }

    fn draw_image(&mut self, image: &ImageData, rect: Rect) {
        self.commands.push(Command::Image {
            size: (image.width, image.height),
            rect,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, dash: Option<&[f32]>) {
        self.commands.push(Command::StrokeRect {
            rect,
            color,
            width,
            dashed: dash.is_some(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, _fill: Color, _stroke: Color) {
        self.commands.push(Command::Circle { center, radius });
    }

    fn draw_label(&mut self, text: &str, position: Point, color: Color) {
        self.commands.push(Command::Label {
            text: text.to_string(),
            position,
            color,
        });
    }
}
