// SPDX-License-Identifier: MPL-2.0
//! Interactive editor canvas.

use crate::domain::element::{ElementKind, ElementMap};
use crate::domain::geometry::Point;
use crate::media::ImageData;
use crate::ui::design_tokens::canvas as tokens;
use crate::ui::face_editor::scene::{self, Rect, Surface, Viewport};
use crate::ui::face_editor::state::CursorHint;
use crate::ui::face_editor::{CanvasMessage, Interaction, Message, State};
use crate::ui::theme;
use iced::mouse;
use iced::widget::canvas::{self, Frame, LineDash, Path, Stroke, Text};
use iced::Color;

/// [`Surface`] drawing into an iced canvas frame.
pub struct FrameSurface<'f> {
    frame: &'f mut Frame,
    viewport: Viewport,
}

impl<'f> FrameSurface<'f> {
    pub fn new(frame: &'f mut Frame, viewport: Viewport) -> Self {
        Self { frame, viewport }
    }
}

impl Surface for FrameSurface<'_> {
    fn clear(&mut self) {
        let size = self.frame.size();
        self.frame.fill_rectangle(
            iced::Point::ORIGIN,
            size,
            theme::canvas_background_color(),
        );
    }

    fn draw_image(&mut self, image: &ImageData, rect: Rect) {
        let bounds = self.viewport.rect_to_screen(rect);
        self.frame
            .draw_image(bounds, canvas::Image::new(image.handle.clone()));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, dash: Option<&[f32]>) {
        let bounds = self.viewport.rect_to_screen(rect);
        let path = Path::rectangle(bounds.position(), bounds.size());
        let mut stroke = Stroke::default().with_width(width).with_color(color);
        if let Some(segments) = dash {
            stroke.line_dash = LineDash {
                segments,
                offset: 0,
            };
        }
        self.frame.stroke(&path, stroke);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, stroke: Color) {
        let circle = Path::circle(self.viewport.to_screen(center), radius);
        self.frame.fill(&circle, fill);
        self.frame.stroke(
            &circle,
            Stroke::default()
                .with_width(tokens::OUTLINE_WIDTH)
                .with_color(stroke),
        );
    }

    fn draw_label(&mut self, text: &str, position: Point, color: Color) {
        let anchor = self.viewport.to_screen(position);
        self.frame.fill_text(Text {
            content: text.to_string(),
            position: iced::Point::new(anchor.x, anchor.y - tokens::LABEL_SIZE),
            color,
            size: tokens::LABEL_SIZE.into(),
            ..Text::default()
        });
    }
}

/// Canvas program rendering the editor scene.
pub struct FaceCanvas<'a> {
    pub state: &'a State,
    /// Localized display names, resolved once per view
    pub labels: ElementMap<String>,
}

impl FaceCanvas<'_> {
    fn viewport(&self, bounds: iced::Rectangle) -> Option<Viewport> {
        let base = self.state.base_image()?;
        Viewport::fit(base.width, base.height, bounds.size())
    }

    fn is_interacting(&self) -> bool {
        self.state.interaction() != Interaction::Idle
    }
}

impl canvas::Program<Message> for FaceCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let viewport = self.viewport(bounds)?;

        match event {
            iced::Event::Mouse(mouse::Event::CursorLeft) if self.is_interacting() => Some(
                Action::publish(Message::Canvas(CanvasMessage::PointerLeft)).and_capture(),
            ),
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Canvas(CanvasMessage::PointerDown(
                        viewport.to_image(position),
                    )))
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.is_interacting() => {
                // Leaving the canvas mid-drag ends the interaction
                let message = match cursor.position_in(bounds) {
                    Some(position) => CanvasMessage::PointerMoved(viewport.to_image(position)),
                    None => CanvasMessage::PointerLeft,
                };
                Some(Action::publish(Message::Canvas(message)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.is_interacting() =>
            {
                Some(Action::publish(Message::Canvas(CanvasMessage::PointerUp)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(viewport) = self.viewport(bounds) {
            let mut surface = FrameSurface::new(&mut frame, viewport);
            scene::render(self.state, &mut surface, |kind: ElementKind| {
                self.labels[kind].clone()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let (Some(viewport), Some(position)) = (self.viewport(bounds), cursor.position_in(bounds))
        else {
            return mouse::Interaction::default();
        };

        match self.state.cursor_hint(viewport.to_image(position)) {
            CursorHint::Default => mouse::Interaction::default(),
            CursorHint::Pointer => mouse::Interaction::Pointer,
            CursorHint::Move if self.is_interacting() => mouse::Interaction::Grabbing,
            CursorHint::Move => mouse::Interaction::Grab,
        }
    }
}
