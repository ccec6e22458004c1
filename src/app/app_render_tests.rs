//! Tests for app_render

use crate::app::App;
use crate::test_utils::test_helpers::{AppHarness, dialga_skin, diamond_ore};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 20;

fn render_app(app: &mut App) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_title_shows_source_label() {
    let mut harness = AppHarness::new();

    let output = render_app(&mut harness.app);

    assert!(output.contains("texsearch"));
    assert!(output.contains("(catalog)"));
}

#[test]
fn test_empty_app_shows_placeholder_and_hint() {
    let mut harness = AppHarness::new();

    let output = render_app(&mut harness.app);

    assert!(output.contains("Search textures..."));
    assert!(output.contains("Nothing picked yet"));
    assert!(output.contains("Esc quit"));
}

#[test]
fn test_panel_covers_picked_pane() {
    let mut harness = AppHarness::new();
    harness.type_text("dia");
    harness.respond(vec![diamond_ore(), dialga_skin()]);

    let output = render_app(&mut harness.app);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("Diamond Ore"));
    assert!(!output.contains("Nothing picked yet"));
}

#[test]
fn test_picked_texture_is_listed() {
    let mut harness = AppHarness::new();
    harness.type_text("dia");
    harness.respond(vec![diamond_ore(), dialga_skin()]);
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Enter);

    let output = render_app(&mut harness.app);

    assert!(output.contains("Picked (1)"));
    assert!(output.contains("✓ Diamond Ore"));
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_click_on_rendered_row_picks_it() {
    let mut harness = AppHarness::new();
    harness.type_text("dia");
    harness.respond(vec![diamond_ore(), dialga_skin()]);
    render_app(&mut harness.app);

    // Title row, then the 3-row input; rows start inside the panel border
    // at y = 5, two lines each
    harness.app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 10,
        row: 7,
        modifiers: KeyModifiers::empty(),
    }));

    assert_eq!(harness.app.picked, vec![dialga_skin()]);
    assert_eq!(harness.app.search.query(), "");
}
