// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{button, column, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = column![Text::new(message_text).size(typography::BODY)].spacing(spacing::XXS);
        if let Some(detail) = notification.detail() {
            body = body.push(
                Text::new(detail.to_string())
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(theme::muted_text_color()),
                    }),
            );
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders all visible notifications stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
