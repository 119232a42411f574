// SPDX-License-Identifier: MPL-2.0

use super::scene::{render, Command, RecordingSurface, Rect};
use super::state::CursorHint;
use super::*;
use crate::domain::geometry::{Handle, Point, MIN_BOX_SIZE};
use crate::ui::design_tokens::canvas as tokens;
use iced::keyboard::{self, Key};

fn blank_image(width: u32, height: u32) -> ImageData {
    ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
}

fn editing_state() -> State {
    let mut state = State::default();
    state.set_base_image(blank_image(800, 600));
    assert_eq!(
        state.update(Message::Sidebar(SidebarMessage::StartProcessing)),
        Event::ProcessingStarted
    );
    state
}

fn press(state: &mut State, x: f32, y: f32) -> Event {
    state.update(CanvasMessage::PointerDown(Point::new(x, y)).into())
}

fn move_to(state: &mut State, x: f32, y: f32) -> Event {
    state.update(CanvasMessage::PointerMoved(Point::new(x, y)).into())
}

fn release(state: &mut State) -> Event {
    state.update(CanvasMessage::PointerUp.into())
}

fn bounds(state: &State, kind: ElementKind) -> (f32, f32, f32, f32) {
    let b = state.element(kind).bounds;
    (b.x, b.y, b.width, b.height)
}

fn character(c: &str) -> Key {
    Key::Character(c.into())
}

#[test]
fn new_editor_state_has_nothing_to_edit() {
    let state = State::default();
    assert!(state.base_image().is_none());
    assert!(!state.is_processed());
    assert_eq!(state.selected(), None);
    assert!(state.composition().is_none());
}

#[test]
fn start_processing_requires_a_base_image() {
    let mut state = State::default();
    assert_eq!(
        state.update(Message::Sidebar(SidebarMessage::StartProcessing)),
        Event::None
    );
    assert!(!state.is_processed());
}

#[test]
fn start_processing_places_default_layout() {
    let state = editing_state();
    assert_eq!(bounds(&state, ElementKind::EyeLeft), (200.0, 200.0, 100.0, 60.0));
    assert_eq!(bounds(&state, ElementKind::EyeRight), (600.0, 200.0, 100.0, 60.0));
    assert_eq!(bounds(&state, ElementKind::Mouth), (400.0, 400.0, 120.0, 40.0));
}

#[test]
fn open_requests_are_forwarded_to_parent() {
    let mut state = State::default();
    assert_eq!(
        state.update(SidebarMessage::OpenBaseImage.into()),
        Event::OpenBaseImageRequested
    );
    assert_eq!(
        state.update(SidebarMessage::OpenOverlay(ElementKind::Mouth).into()),
        Event::OpenOverlayRequested(ElementKind::Mouth)
    );
    assert_eq!(
        state.update(SidebarMessage::SaveDiagnostics.into()),
        Event::DiagnosticsExportRequested
    );
}

#[test]
fn pointer_is_inert_before_processing() {
    let mut state = State::default();
    state.set_base_image(blank_image(800, 600));

    assert_eq!(press(&mut state, 200.0, 200.0), Event::None);
    assert_eq!(state.selected(), None);
    assert_eq!(state.interaction(), Interaction::Idle);
}

#[test]
fn clicking_an_element_selects_and_starts_drag() {
    let mut state = editing_state();

    assert_eq!(
        press(&mut state, 200.0, 200.0),
        Event::SelectionChanged(Some(ElementKind::EyeLeft))
    );
    assert_eq!(state.selected(), Some(ElementKind::EyeLeft));
    assert_eq!(
        state.interaction(),
        Interaction::Dragging {
            anchor: Point::new(200.0, 200.0)
        }
    );
}

#[test]
fn drag_applies_incremental_deltas() {
    let mut state = editing_state();
    press(&mut state, 400.0, 400.0);

    move_to(&mut state, 410.0, 405.0);
    move_to(&mut state, 420.0, 395.0);
    assert_eq!(bounds(&state, ElementKind::Mouth), (420.0, 395.0, 120.0, 40.0));

    release(&mut state);
    assert_eq!(state.interaction(), Interaction::Idle);
    move_to(&mut state, 500.0, 500.0);
    assert_eq!(bounds(&state, ElementKind::Mouth), (420.0, 395.0, 120.0, 40.0));
}

#[test]
fn clicking_empty_area_clears_selection() {
    let mut state = editing_state();
    press(&mut state, 200.0, 200.0);
    release(&mut state);

    assert_eq!(press(&mut state, 10.0, 10.0), Event::SelectionChanged(None));
    assert_eq!(state.selected(), None);
    assert_eq!(press(&mut state, 10.0, 10.0), Event::None);
}

#[test]
fn handle_takes_priority_over_body() {
    let mut state = editing_state();
    press(&mut state, 400.0, 400.0);
    release(&mut state);

    // Bottom-right corner of the mouth is at (460, 420); this point is
    // inside the body and within reach of the handle.
    assert_eq!(press(&mut state, 455.0, 415.0), Event::None);
    assert_eq!(
        state.interaction(),
        Interaction::Resizing {
            handle: Handle::BottomRight,
            anchor: Point::new(455.0, 415.0),
        }
    );
    assert_eq!(state.selected(), Some(ElementKind::Mouth));
}

#[test]
fn handles_only_hit_on_selected_element() {
    let mut state = editing_state();

    // Top-left corner of the left eye, nothing selected yet.
    let event = press(&mut state, 150.0, 170.0);
    assert_eq!(event, Event::SelectionChanged(Some(ElementKind::EyeLeft)));
    assert!(matches!(state.interaction(), Interaction::Dragging { .. }));
}

#[test]
fn resize_follows_handle_rules_incrementally() {
    let mut state = editing_state();
    press(&mut state, 200.0, 200.0);
    release(&mut state);

    press(&mut state, 150.0, 170.0);
    move_to(&mut state, 155.0, 172.0);
    move_to(&mut state, 160.0, 174.0);
    release(&mut state);

    assert_eq!(bounds(&state, ElementKind::EyeLeft), (210.0, 204.0, 90.0, 56.0));
}

#[test]
fn resize_never_goes_below_minimum() {
    let mut state = editing_state();
    press(&mut state, 400.0, 400.0);
    release(&mut state);

    press(&mut state, 460.0, 400.0);
    move_to(&mut state, 200.0, 400.0);
    move_to(&mut state, 100.0, 400.0);

    let (_, _, width, height) = bounds(&state, ElementKind::Mouth);
    assert_eq!(width, MIN_BOX_SIZE);
    assert!(height >= MIN_BOX_SIZE);
}

/// 500px along the axis from `from` toward `to`, or zero if they coincide.
fn push_toward(from: f32, to: f32) -> f32 {
    if from == to {
        0.0
    } else {
        (to - from).signum() * 500.0
    }
}

#[test]
fn every_handle_clamps_when_dragged_past_the_opposite_side() {
    for handle in Handle::ALL {
        let mut state = editing_state();
        press(&mut state, 400.0, 400.0);
        release(&mut state);

        let start = state.element(ElementKind::Mouth).bounds;
        let grip = start
            .handles()
            .into_iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, position)| position)
            .expect("handle position");
        press(&mut state, grip.x, grip.y);
        assert!(matches!(
            state.interaction(),
            Interaction::Resizing { handle: h, .. } if h == handle
        ));

        // Push through the center and 500px beyond, in several steps.
        let inward = (push_toward(grip.x, start.x), push_toward(grip.y, start.y));
        for step in 1..=4 {
            let t = step as f32 / 4.0;
            move_to(&mut state, grip.x + inward.0 * t, grip.y + inward.1 * t);
        }

        let (_, _, width, height) = bounds(&state, ElementKind::Mouth);
        let expected_width = if inward.0 == 0.0 { start.width } else { MIN_BOX_SIZE };
        let expected_height = if inward.1 == 0.0 { start.height } else { MIN_BOX_SIZE };
        assert_eq!((width, height), (expected_width, expected_height), "{handle:?}");
    }
}

#[test]
fn pointer_leaving_ends_interaction() {
    let mut state = editing_state();
    press(&mut state, 200.0, 200.0);
    state.update(CanvasMessage::PointerLeft.into());
    assert_eq!(state.interaction(), Interaction::Idle);
    assert_eq!(state.selected(), Some(ElementKind::EyeLeft));
}

#[test]
fn overlapping_elements_resolve_in_fixed_order() {
    let mut state = editing_state();
    press(&mut state, 600.0, 200.0);
    move_to(&mut state, 200.0, 200.0);
    release(&mut state);
    press(&mut state, 10.0, 10.0);

    assert_eq!(
        press(&mut state, 200.0, 200.0),
        Event::SelectionChanged(Some(ElementKind::EyeLeft))
    );
}

#[test]
fn keyboard_shortcuts_are_inert_before_processing() {
    let mut state = State::default();
    state.set_base_image(blank_image(100, 100));

    assert_eq!(state.handle_key(&character("s")), Event::None);
    assert_eq!(state.handle_key(&character("r")), Event::None);
    assert_eq!(
        state.handle_key(&Key::Named(keyboard::key::Named::Escape)),
        Event::None
    );
}

#[test]
fn s_requests_export_in_either_case() {
    let mut state = editing_state();
    assert_eq!(state.handle_key(&character("s")), Event::ExportRequested);
    assert_eq!(state.handle_key(&character("S")), Event::ExportRequested);
    assert_eq!(state.handle_key(&character("x")), Event::None);
}

#[test]
fn r_resets_geometry_and_selection() {
    let mut state = editing_state();
    state.set_overlay(ElementKind::Mouth, blank_image(4, 4));
    press(&mut state, 400.0, 400.0);
    move_to(&mut state, 300.0, 300.0);

    assert_eq!(state.handle_key(&character("R")), Event::ElementsReset);
    assert_eq!(bounds(&state, ElementKind::Mouth), (400.0, 400.0, 120.0, 40.0));
    assert_eq!(state.selected(), None);
    assert_eq!(state.interaction(), Interaction::Idle);
    assert!(state.overlay(ElementKind::Mouth).is_some());
}

#[test]
fn escape_clears_selection() {
    let mut state = editing_state();
    press(&mut state, 200.0, 200.0);

    assert_eq!(
        state.handle_key(&Key::Named(keyboard::key::Named::Escape)),
        Event::SelectionChanged(None)
    );
    assert_eq!(state.selected(), None);
    assert_eq!(state.interaction(), Interaction::Idle);
}

#[test]
fn sidebar_reset_and_export_need_processing() {
    let mut state = State::default();
    assert_eq!(state.update(SidebarMessage::Reset.into()), Event::None);
    assert_eq!(state.update(SidebarMessage::Export.into()), Event::None);

    let mut state = editing_state();
    assert_eq!(state.update(SidebarMessage::Reset.into()), Event::ElementsReset);
    assert_eq!(state.update(SidebarMessage::Export.into()), Event::ExportRequested);
}

#[test]
fn new_base_image_stops_editing_but_keeps_overlays() {
    let mut state = editing_state();
    state.set_overlay(ElementKind::EyeRight, blank_image(2, 2));
    press(&mut state, 600.0, 200.0);

    state.set_base_image(blank_image(400, 300));
    assert!(!state.is_processed());
    assert_eq!(state.selected(), None);
    assert!(state.overlay(ElementKind::EyeRight).is_some());
    assert_eq!(bounds(&state, ElementKind::EyeRight), (300.0, 100.0, 100.0, 60.0));
}

#[test]
fn composition_only_includes_assigned_overlays() {
    let mut state = editing_state();
    state.set_overlay(ElementKind::EyeRight, blank_image(3, 3));
    state.set_overlay(ElementKind::EyeLeft, blank_image(2, 2));

    let composition = state.composition().expect("composition");
    assert_eq!(composition.base.width, 800);
    assert_eq!(composition.layers.len(), 2);
    assert_eq!(composition.layers[0].image.width, 2);
    assert_eq!(
        composition.layers[0].bounds,
        state.element(ElementKind::EyeLeft).bounds
    );
    assert_eq!(composition.layers[1].image.width, 3);
}

#[test]
fn cursor_hint_reflects_hover_target() {
    let mut state = editing_state();
    assert_eq!(state.cursor_hint(Point::new(5.0, 5.0)), CursorHint::Default);
    assert_eq!(state.cursor_hint(Point::new(400.0, 400.0)), CursorHint::Move);

    press(&mut state, 400.0, 400.0);
    release(&mut state);
    assert_eq!(state.cursor_hint(Point::new(460.0, 420.0)), CursorHint::Pointer);
}

// =============================================================================
// Scene rendering
// =============================================================================

fn rendered(state: &State) -> Vec<Command> {
    let mut surface = RecordingSurface::default();
    render(state, &mut surface, |kind| kind.id().to_string());
    surface.commands
}

#[test]
fn empty_editor_only_clears() {
    assert_eq!(rendered(&State::default()), vec![Command::Clear]);
}

#[test]
fn base_only_before_processing() {
    let mut state = State::default();
    state.set_base_image(blank_image(80, 60));

    assert_eq!(
        rendered(&state),
        vec![
            Command::Clear,
            Command::Image {
                size: (80, 60),
                rect: Rect::new(0.0, 0.0, 80.0, 60.0),
            },
        ]
    );
}

#[test]
fn placeholders_and_overlays_are_drawn_in_order() {
    let mut state = editing_state();
    state.set_overlay(ElementKind::EyeRight, blank_image(5, 5));

    let commands = rendered(&state);
    // clear, base, then (shape + label) per element
    assert_eq!(commands.len(), 2 + 3 * 2);

    assert!(matches!(
        &commands[2],
        Command::StrokeRect { rect, dashed: true, .. } if *rect == Rect::new(150.0, 170.0, 100.0, 60.0)
    ));
    assert!(matches!(
        &commands[3],
        Command::Label { text, position, .. } if text == "eye_left" && *position == Point::new(150.0, 165.0)
    ));
    assert!(matches!(
        &commands[4],
        Command::Image { size: (5, 5), rect } if *rect == Rect::new(550.0, 170.0, 100.0, 60.0)
    ));
    assert!(matches!(&commands[7], Command::Label { text, .. } if text == "mouth"));
}

#[test]
fn selection_adds_outline_and_eight_handles() {
    let mut state = editing_state();
    press(&mut state, 400.0, 400.0);

    let commands = rendered(&state);
    let selection = &commands[8..];
    assert_eq!(selection.len(), 9);
    assert!(matches!(
        &selection[0],
        Command::StrokeRect { color, width, dashed: true, .. }
            if *color == tokens::SELECTION && *width == 1.0
    ));
    assert!(selection[1..]
        .iter()
        .all(|command| matches!(command, Command::Circle { radius, .. } if *radius == 5.0)));
}
