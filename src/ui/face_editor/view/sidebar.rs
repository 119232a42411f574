// SPDX-License-Identifier: MPL-2.0
//! Sidebar layout composition.

use crate::domain::element::{ElementKind, ElementMap};
use crate::domain::geometry::CenteredBox;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::face_editor::{Message, SidebarMessage, State, ViewContext};
use crate::ui::theme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, container, image, text, Column, Scrollable};
use iced::{ContentFit, Element, Length, Theme};

pub struct SidebarModel<'a> {
    pub base_size: Option<(u32, u32)>,
    pub overlays_loaded: ElementMap<bool>,
    pub processed: bool,
    pub selected: Option<(ElementKind, CenteredBox)>,
    pub preview: Option<&'a ImageData>,
}

impl<'a> SidebarModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            base_size: state.base_image().map(|base| (base.width, base.height)),
            overlays_loaded: ElementMap::from_fn(|kind| state.overlay(kind).is_some()),
            processed: state.is_processed(),
            selected: state
                .selected()
                .map(|kind| (kind, state.element(kind).bounds)),
            preview: state.preview(),
        }
    }
}

pub fn view<'a>(model: SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sections = Column::new()
        .spacing(spacing::SM)
        .push(images_section(&model, ctx))
        .push(horizontal_rule(1))
        .push(actions_section(&model, ctx))
        .push(horizontal_rule(1))
        .push(selection_section(&model, ctx))
        .push(horizontal_rule(1))
        .push(preview_section(&model, ctx))
        .push(horizontal_rule(1))
        .push(shortcuts_section(ctx));

    let scrollable = Scrollable::new(sections)
        .direction(Direction::Vertical(Scrollbar::new()))
        .height(Length::Fill)
        .width(Length::Fill);

    container(scrollable)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(theme::sidebar_style)
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn caption<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        })
        .into()
}

fn action_button<'a>(
    label: String,
    message: SidebarMessage,
    enabled: bool,
    primary: bool,
) -> Element<'a, Message> {
    let btn = button(text(label).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(if primary {
            iced::widget::button::primary
        } else {
            iced::widget::button::secondary
        });

    if enabled {
        btn.on_press(message.into()).into()
    } else {
        btn.into()
    }
}

fn images_section<'a>(model: &SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let base_status = match model.base_size {
        Some((width, height)) => ctx.i18n.tr_with_args(
            "base-status-loaded",
            &[
                ("width", width.to_string().as_str()),
                ("height", height.to_string().as_str()),
            ],
        ),
        None => ctx.i18n.tr("base-status-missing"),
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("section-images")))
        .push(action_button(
            ctx.i18n.tr("button-open-base"),
            SidebarMessage::OpenBaseImage,
            true,
            false,
        ))
        .push(caption(base_status));

    for (kind, loaded) in model.overlays_loaded.iter() {
        let name = ctx.i18n.tr(kind.i18n_key());
        let status_key = if *loaded {
            "overlay-status-loaded"
        } else {
            "overlay-status-missing"
        };
        column = column
            .push(action_button(
                ctx.i18n
                    .tr_with_args("button-open-overlay", &[("element", name.as_str())]),
                SidebarMessage::OpenOverlay(kind),
                true,
                false,
            ))
            .push(caption(
                ctx.i18n.tr_with_args(status_key, &[("element", name.as_str())]),
            ));
    }

    column.into()
}

fn actions_section<'a>(model: &SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("section-actions")))
        .push(action_button(
            ctx.i18n.tr("button-start"),
            SidebarMessage::StartProcessing,
            model.base_size.is_some(),
            true,
        ))
        .push(action_button(
            ctx.i18n.tr("button-reset"),
            SidebarMessage::Reset,
            model.processed,
            false,
        ))
        .push(action_button(
            ctx.i18n.tr("button-export"),
            SidebarMessage::Export,
            model.processed,
            true,
        ))
        .push(action_button(
            ctx.i18n.tr("button-save-diagnostics"),
            SidebarMessage::SaveDiagnostics,
            true,
            false,
        ))
        .into()
}

fn selection_section<'a>(model: &SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .push(section_title(ctx.i18n.tr("section-selected")));

    let Some((kind, bounds)) = model.selected else {
        return column.push(caption(ctx.i18n.tr("selected-none"))).into();
    };

    let (x, y) = (format_px(bounds.x), format_px(bounds.y));
    let (width, height) = (format_px(bounds.width), format_px(bounds.height));
    let name = ctx.i18n.tr(kind.i18n_key());

    column
        .push(
            text(ctx.i18n.tr_with_args("selected-name", &[("name", name.as_str())]))
                .size(typography::BODY),
        )
        .push(caption(ctx.i18n.tr_with_args(
            "selected-position",
            &[("x", x.as_str()), ("y", y.as_str())],
        )))
        .push(caption(ctx.i18n.tr_with_args(
            "selected-size",
            &[("width", width.as_str()), ("height", height.as_str())],
        )))
        .into()
}

fn preview_section<'a>(model: &SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match model.preview {
        Some(preview) => container(
            image(preview.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .padding(spacing::XXS)
        .style(theme::preview_frame_style)
        .into(),
        None => caption(ctx.i18n.tr("preview-empty")),
    };

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("section-preview")))
        .push(body)
        .into()
}

fn shortcuts_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ["shortcut-export", "shortcut-reset", "shortcut-escape", "shortcut-drag"]
        .into_iter()
        .fold(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_title(ctx.i18n.tr("section-shortcuts"))),
            |column, key| column.push(caption(ctx.i18n.tr(key))),
        )
        .into()
}

/// Rounds a coordinate to whole pixels for display.
fn format_px(value: f32) -> String {
    format!("{:.0}", value.round())
}
