// SPDX-License-Identifier: MPL-2.0
//! Canvas area: the interactive scene, or a hint when there is nothing to edit.

use crate::domain::element::ElementMap;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::face_editor::overlay::FaceCanvas;
use crate::ui::face_editor::{Message, State, ViewContext};
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Canvas, Stack};
use iced::{Element, Length, Theme};

pub struct CanvasModel<'a> {
    pub state: &'a State,
    pub has_base: bool,
    pub processed: bool,
}

impl<'a> CanvasModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            state,
            has_base: state.base_image().is_some(),
            processed: state.is_processed(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let surface: Element<'a, Message> = if model.has_base {
        let labels = ElementMap::from_fn(|kind| ctx.i18n.tr(kind.i18n_key()));
        let canvas = Canvas::new(FaceCanvas {
            state: model.state,
            labels,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        if model.processed {
            canvas.into()
        } else {
            Stack::new()
                .push(canvas)
                .push(hint(ctx.i18n.tr("canvas-not-started"), Vertical::Bottom))
                .into()
        }
    } else {
        hint(ctx.i18n.tr("canvas-empty"), Vertical::Center)
    };

    container(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::editor_canvas_style(theme::canvas_background_color()))
        .into()
}

fn hint<'a>(label: String, align_y: Vertical) -> Element<'a, Message> {
    container(
        text(label)
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(theme::muted_text_color()),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(align_y)
    .into()
}
