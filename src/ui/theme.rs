// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and container styles for the editor.

use crate::ui::design_tokens::{border, canvas, palette, radius};
use iced::widget::container;
use iced::{Color, Theme};

/// Backdrop behind the base image inside the canvas area.
pub fn canvas_background_color() -> Color {
    canvas::BACKDROP
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Style for the editor canvas area.
pub fn editor_canvas_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}

/// Style for the sidebar panel, following the active theme.
pub fn sidebar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Framed box around the export preview.
pub fn preview_frame_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(canvas_background_color())),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
