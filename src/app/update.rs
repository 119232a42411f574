// SPDX-License-Identifier: MPL-2.0
//! Update loop: editor events, dialogs, loading and export.
//!
//! Decoding and compositing run on the blocking thread pool; file dialogs
//! are awaited on the async runtime. Every result comes back as a
//! [`Message`].

use super::{config, App, Message};
use crate::diagnostics::{self, UserAction};
use crate::domain::element::ElementKind;
use crate::error::{Error, Result};
use crate::media::{self, extensions, RenderedExport};
use crate::ui::face_editor::{self, Event};
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::{Path, PathBuf};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Editor(message) => {
            let event = app.editor.update(message);
            handle_editor_event(app, event)
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::BaseImageDialogResult(path) => match path {
            Some(path) => load_base_image(path),
            None => Task::none(),
        },
        Message::OverlayDialogResult { kind, path } => match path {
            Some(path) => load_overlay(kind, path),
            None => Task::none(),
        },
        Message::BaseImageLoaded { path, result } => {
            handle_base_image_loaded(app, &path, result);
            Task::none()
        }
        Message::OverlayLoaded { kind, path, result } => {
            handle_overlay_loaded(app, kind, &path, result);
            Task::none()
        }
        Message::ExportRendered(result) => handle_export_rendered(app, result),
        Message::ExportDialogResult(path) => handle_export_dialog_result(app, path),
        Message::ExportSaved { path, result } => {
            handle_export_saved(app, &path, result);
            Task::none()
        }
        Message::DiagnosticsDialogResult(path) => {
            if let Some(path) = path {
                handle_diagnostics_dialog_result(app, &path);
            }
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            app.diagnostics.process_pending();
            Task::none()
        }
    }
}

fn handle_editor_event(app: &mut App, event: Event) -> Task<Message> {
    match event {
        Event::None => Task::none(),
        Event::OpenBaseImageRequested => open_image_dialog(
            app.i18n.tr("dialog-open-base-title"),
            app.i18n.tr("dialog-filter-images"),
            app.last_open_directory.clone(),
            Message::BaseImageDialogResult,
        ),
        Event::OpenOverlayRequested(kind) => {
            let name = app.i18n.tr(kind.i18n_key());
            open_image_dialog(
                app.i18n
                    .tr_with_args("dialog-open-overlay-title", &[("element", name.as_str())]),
                app.i18n.tr("dialog-filter-images"),
                app.last_open_directory.clone(),
                move |path| Message::OverlayDialogResult { kind, path },
            )
        }
        Event::ProcessingStarted => {
            app.diagnostics.log_action(UserAction::StartProcessing);
            Task::none()
        }
        Event::ElementsReset => {
            app.diagnostics.log_action(UserAction::ResetElements);
            Task::none()
        }
        Event::SelectionChanged(Some(kind)) => {
            app.diagnostics.log_action(UserAction::SelectElement {
                element: kind.id().to_string(),
            });
            Task::none()
        }
        Event::SelectionChanged(None) => {
            app.diagnostics.log_action(UserAction::ClearSelection);
            Task::none()
        }
        Event::ExportRequested => request_export(&app.editor),
        Event::DiagnosticsExportRequested => open_diagnostics_dialog(app),
    }
}

/// Runs `job` on the blocking thread pool.
async fn run_blocking<T, F>(job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

fn open_image_dialog<F>(
    title: String,
    filter_name: String,
    directory: Option<PathBuf>,
    on_result: F,
) -> Task<Message>
where
    F: FnOnce(Option<PathBuf>) -> Message + Send + 'static,
{
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, extensions::IMAGE_EXTENSIONS);

            if let Some(dir) = directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        on_result,
    )
}

pub(super) fn load_base_image(path: PathBuf) -> Task<Message> {
    let source = path.clone();
    Task::perform(
        run_blocking(move || media::load_image(&source)),
        move |result| Message::BaseImageLoaded { path, result },
    )
}

pub(super) fn load_overlay(kind: ElementKind, path: PathBuf) -> Task<Message> {
    let source = path.clone();
    Task::perform(
        run_blocking(move || media::load_image(&source)),
        move |result| Message::OverlayLoaded { kind, path, result },
    )
}

fn notify_load_error(app: &mut App, path: &Path, err: &Error) {
    eprintln!("[load] Failed to load {}: {}", path.display(), err);
    app.notifications.push(
        Notification::error("notification-load-error")
            .with_arg("path", path.display().to_string())
            .with_detail(app.i18n.tr(err.i18n_key())),
    );
}

/// Lowercase file extension, recorded instead of the path.
fn source_format(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn remember_directory(app: &mut App, path: &Path) {
    app.last_open_directory = path.parent().map(Path::to_path_buf);
}

fn handle_base_image_loaded(app: &mut App, path: &Path, result: Result<media::ImageData>) {
    match result {
        Ok(image) => {
            app.notifications.clear_load_errors();
            app.diagnostics.log_action_with_details(
                UserAction::LoadBaseImage {
                    width: image.width,
                    height: image.height,
                },
                source_format(path),
            );
            remember_directory(app, path);
            app.editor.set_base_image(image);
        }
        Err(err) => notify_load_error(app, path, &err),
    }
}

fn handle_overlay_loaded(
    app: &mut App,
    kind: ElementKind,
    path: &Path,
    result: Result<media::ImageData>,
) {
    match result {
        Ok(image) => {
            app.notifications.clear_load_errors();
            app.diagnostics.log_action_with_details(
                UserAction::LoadOverlay {
                    element: kind.id().to_string(),
                },
                source_format(path),
            );
            remember_directory(app, path);
            app.editor.set_overlay(kind, image);
        }
        Err(err) => notify_load_error(app, path, &err),
    }
}

/// Composites the current layout in the background. A no-op before
/// editing has started.
fn request_export(editor: &face_editor::State) -> Task<Message> {
    let Some(composition) = editor.composition() else {
        return Task::none();
    };
    Task::perform(
        run_blocking(move || media::render_export(&composition)),
        Message::ExportRendered,
    )
}

fn handle_export_rendered(app: &mut App, result: Result<RenderedExport>) -> Task<Message> {
    let rendered = match result {
        Ok(rendered) => rendered,
        Err(err) => {
            eprintln!("[export] Compositing failed: {err}");
            app.notifications
                .push(Notification::error("notification-export-error").with_detail(err.to_string()));
            return Task::none();
        }
    };

    app.editor.set_preview(rendered.preview);
    app.pending_export = Some(rendered.png);

    let title = app.i18n.tr("dialog-save-title");
    let filter_name = app.i18n.tr("dialog-filter-png");
    let file_name = app.config.export.file_name.clone();
    let directory = app.config.export.last_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(&file_name)
                .add_filter(&filter_name, extensions::EXPORT_EXTENSIONS);

            // Use last export directory if available
            if let Some(dir) = directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ExportDialogResult,
    )
}

fn handle_export_dialog_result(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(png) = app.pending_export.take() else {
        return Task::none();
    };
    let Some(path) = path else {
        return Task::none();
    };

    let path = with_export_extension(path);
    let destination = path.clone();
    Task::perform(
        run_blocking(move || media::save_png(&destination, &png)),
        move |result| Message::ExportSaved { path, result },
    )
}

/// Forces the `.png` extension; an existing `.png` in any case is kept.
fn with_export_extension(mut path: PathBuf) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(config::EXPORT_EXTENSION));
    if !has_extension {
        path.set_extension(config::EXPORT_EXTENSION);
    }
    path
}

fn handle_export_saved(app: &mut App, path: &Path, result: Result<()>) {
    if let Err(err) = result {
        eprintln!("[export] Failed to write {}: {}", path.display(), err);
        app.notifications
            .push(Notification::error("notification-export-error").with_detail(err.to_string()));
        return;
    }

    app.diagnostics.log_action(UserAction::ExportImage);
    app.notifications.push(
        Notification::success("notification-export-success")
            .with_arg("path", path.display().to_string()),
    );

    let directory = path.parent().map(Path::to_path_buf);
    if directory.is_some() && directory != app.config.export.last_directory {
        app.config.export.last_directory = directory;
        if let Err(err) = config::save(&app.config) {
            eprintln!("[config] Failed to save settings: {err}");
            app.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

fn open_diagnostics_dialog(app: &App) -> Task<Message> {
    let title = app.i18n.tr("dialog-save-diagnostics-title");
    let filter_name = app.i18n.tr("dialog-filter-json");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_directory(diagnostics::default_export_directory())
                .set_file_name(diagnostics::generate_default_filename())
                .add_filter(&filter_name, &["json"])
                .save_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::DiagnosticsDialogResult,
    )
}

fn handle_diagnostics_dialog_result(app: &mut App, path: &Path) {
    match app.diagnostics.export_to_file(path) {
        Ok(written) => app.notifications.push(
            Notification::success("notification-diagnostics-success")
                .with_arg("path", written.display().to_string()),
        ),
        Err(err) => {
            eprintln!("[diagnostics] Failed to write {}: {}", path.display(), err);
            app.notifications.push(
                Notification::error("notification-diagnostics-error")
                    .with_detail(app.i18n.tr(err.i18n_key())),
            );
        }
    }
}
