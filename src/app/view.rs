// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The editor fills the window; toasts are stacked on top of it.

use super::{App, Message};
use crate::ui::face_editor::ViewContext;
use crate::ui::notifications::Toast;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Renders the editor with the notification overlay.
pub fn view(app: &App) -> Element<'_, Message> {
    let editor = app
        .editor
        .view(ViewContext { i18n: &app.i18n })
        .map(Message::Editor);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Container::new(Stack::new().push(editor).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
