// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the face editor.
//!
//! The `App` struct wires together the editor, localization, settings and
//! notifications, and translates editor events into side effects like file
//! dialogs, image decoding or writing the export.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::element::ElementKind;
use crate::ui::face_editor;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    editor: face_editor::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Encoded export waiting for the save dialog to return.
    pending_export: Option<Arc<Vec<u8>>>,
    /// Directory of the last opened image, used as the dialog start point.
    last_open_directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor", &self.editor)
            .field("theme_mode", &self.theme_mode)
            .field("pending_export", &self.pending_export.is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::default(),
            config: config::Config::default(),
            editor: face_editor::State::default(),
            theme_mode: ThemeMode::System,
            notifications,
            diagnostics,
            pending_export: None,
            last_open_directory: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off loading of the images
    /// named on the command line or in the configured presets.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let mut tasks = Vec::new();

        if let Some(path) = flags.base_image.as_deref() {
            tasks.push(update::load_base_image(PathBuf::from(path)));
        }

        for kind in ElementKind::ALL {
            let path = flags
                .overlay(kind)
                .map(PathBuf::from)
                .or_else(|| config.overlays.preset(kind).map(PathBuf::from));
            if let Some(path) = path {
                tasks.push(update::load_overlay(kind, path));
            }
        }

        app.config = config;
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_without_images() {
        let app = App::default();
        assert!(app.editor.base_image().is_none());
        assert!(app.pending_export.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        assert!(!app.title().starts_with("MISSING"));
    }
}
