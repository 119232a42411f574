// SPDX-License-Identifier: MPL-2.0
use face_replacer::app::config::{self, Config};
use face_replacer::app::i18n::fluent::I18n;
use face_replacer::domain::element::ElementKind;
use face_replacer::domain::geometry::Point;
use face_replacer::media::{self, ImageData};
use face_replacer::ui::face_editor::{CanvasMessage, Event, Message, SidebarMessage, State};
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::tempdir;

const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn write_png(path: &Path, width: u32, height: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(width, height, color)
        .save(path)
        .expect("write png");
}

fn pointer(state: &mut State, message: CanvasMessage) -> Event {
    state.update(Message::Canvas(message))
}

#[test]
fn edit_and_export_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base_path = dir.path().join("base.png");
    let mouth_path = dir.path().join("mouth.png");
    write_png(&base_path, 400, 300, GRAY);
    write_png(&mouth_path, 12, 4, RED);

    let mut editor = State::default();
    editor.set_base_image(media::load_image(&base_path).expect("load base"));
    editor.set_overlay(
        ElementKind::Mouth,
        media::load_image(&mouth_path).expect("load mouth"),
    );
    assert_eq!(
        editor.update(Message::Sidebar(SidebarMessage::StartProcessing)),
        Event::ProcessingStarted
    );

    // Mouth starts centered at (200, 200); drag it 50 px to the right.
    assert_eq!(
        pointer(&mut editor, CanvasMessage::PointerDown(Point::new(200.0, 200.0))),
        Event::SelectionChanged(Some(ElementKind::Mouth))
    );
    pointer(&mut editor, CanvasMessage::PointerMoved(Point::new(250.0, 200.0)));
    pointer(&mut editor, CanvasMessage::PointerUp);

    let composition = editor.composition().expect("composition");
    assert_eq!(composition.layers.len(), 1);

    let rendered = media::render_export(&composition).expect("render export");
    let out_path = dir.path().join("output.png");
    media::save_png(&out_path, &rendered.png).expect("save export");

    let exported = image_rs::open(&out_path).expect("open export").to_rgba8();
    assert_eq!(exported.dimensions(), (400, 300));
    // Mouth box is 120 x 40 centered at (250, 200): x in [190, 310), y in [180, 220).
    assert_eq!(*exported.get_pixel(250, 200), RED);
    assert_eq!(*exported.get_pixel(191, 181), RED);
    assert_eq!(*exported.get_pixel(185, 200), GRAY);
    // Eyes have no overlay and leave no trace in the export.
    assert_eq!(*exported.get_pixel(100, 100), GRAY);
}

#[test]
fn reset_restores_defaults_after_editing() {
    let mut editor = State::default();
    editor.set_base_image(ImageData::from_rgba(800, 600, vec![0; 800 * 600 * 4]));
    editor.update(Message::Sidebar(SidebarMessage::StartProcessing));

    pointer(&mut editor, CanvasMessage::PointerDown(Point::new(600.0, 200.0)));
    pointer(&mut editor, CanvasMessage::PointerMoved(Point::new(650.0, 260.0)));
    pointer(&mut editor, CanvasMessage::PointerLeft);
    assert_eq!(editor.element(ElementKind::EyeRight).bounds.center(), Point::new(650.0, 260.0));

    assert_eq!(
        editor.update(Message::Sidebar(SidebarMessage::Reset)),
        Event::ElementsReset
    );
    let bounds = editor.element(ElementKind::EyeRight).bounds;
    assert_eq!((bounds.x, bounds.y, bounds.width, bounds.height), (600.0, 200.0, 100.0, 60.0));
    assert_eq!(editor.selected(), None);
}

#[test]
fn svg_overlay_is_rasterized() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("eye.svg");
    std::fs::write(
        &path,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="red"/></svg>"#,
    )
    .expect("write svg");

    let image = media::load_image(&path).expect("load svg");
    assert_eq!((image.width, image.height), (20, 10));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    assert!(media::load_image(dir.path().join("absent.png")).is_err());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("element-mouth"), "Mouth");

    let mut chinese = Config::default();
    chinese.general.language = Some("zh-CN".to_string());
    config::save_to_path(&chinese, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");
    assert_eq!(i18n.tr("element-mouth"), "嘴巴");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("zh-CN".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[export\nfile_name = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
