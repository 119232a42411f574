// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod canvas;
pub mod sidebar;

use iced::widget::{container, Row};
use iced::{Element, Length};

use super::{Message, State, ViewContext};
use canvas::CanvasModel;
use sidebar::SidebarModel;

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sidebar = sidebar::view(SidebarModel::from_state(state), &ctx);
    let canvas = canvas::view(CanvasModel::from_state(state), &ctx);

    let main_row = Row::new().spacing(0.0).push(sidebar).push(canvas);

    container(main_row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
