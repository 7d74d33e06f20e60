//! Snapshot tests for TUI rendering.
//!
//! Each screen is rendered to a test buffer and compared against an inline
//! snapshot. Review visual changes with `cargo insta review`.

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::{backend::TestBackend, Terminal};
use share_selection::config::TuiConfig;
use share_selection::tui::app::{ConfirmAction, Mode};
use share_selection::tui::event::handle_key_event;
use share_selection::tui::ui::render;
use share_selection::tui::App;
use share_selection::SelectionController;
use tempfile::{tempdir, TempDir};

/// Render the app to a string for snapshot comparison.
fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }

    output
}

fn press(app: &mut App, c: char) {
    handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

/// a.txt (100 B), b.txt (50 B) and music/ holding one 2 KiB file.
fn populated_app() -> (TempDir, App) {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.txt"), vec![0u8; 100]).unwrap();
    fs::write(temp.path().join("b.txt"), vec![0u8; 50]).unwrap();
    fs::create_dir(temp.path().join("music")).unwrap();
    fs::write(temp.path().join("music/song.ogg"), vec![0u8; 2048]).unwrap();

    let mut app = App::new(SelectionController::default(), &TuiConfig::default());
    app.add_paths(vec![
        temp.path().join("music"),
        temp.path().join("b.txt"),
        temp.path().join("a.txt"),
    ]);
    (temp, app)
}

#[test]
fn test_empty_app_snapshot() {
    let app = App::new(SelectionController::default(), &TuiConfig::default());
    let output = render_to_string(&app, 80, 12);
    assert_snapshot!(output, @r"
    ┌ Share Selection ─────────────────────────────────────────────────────────────┐
    │   │  ○ Not sharing                                                           │
    └──────────────────────────────────────────────────────────────────────────────┘
    ┌──────────────────────────────────────────────────────────────────────────────┐
    │                      Press 'a' to add files and folders                      │
    │                                                                              │
    │                                                                              │
    │                                                                              │
    │                                                                              │
    └──────────────────────────────────────────────────────────────────────────────┘
                         [a] Add  [s] Share  [?] Help  [q] Quit

    ");
}

#[test]
fn test_populated_snapshot() {
    let (_temp, app) = populated_app();
    let output = render_to_string(&app, 80, 12);
    assert_snapshot!(output, @r"
    ┌ Share Selection ─────────────────────────────────────────────────────────────┐
    │ 3 files, 2.15 KiB  │  ○ Not sharing                                          │
    └──────────────────────────────────────────────────────────────────────────────┘
    ┌──────────────────────────────────────────────────────────────────────────────┐
    │  a.txt                                                                  100 B│
    │  b.txt                                                                   50 B│
    │  music/                                                                 2 KiB│
    │                                                                              │
    │                                                                              │
    └──────────────────────────────────────────────────────────────────────────────┘
                                      Added 3 items

    ");
}

#[test]
fn test_sharing_locked_snapshot() {
    let (_temp, mut app) = populated_app();
    press(&mut app, ' ');
    press(&mut app, 's');
    assert!(app.marked.is_empty());

    let output = render_to_string(&app, 80, 12);
    assert_snapshot!(output, @r"
    ┌ Share Selection ─────────────────────────────────────────────────────────────┐
    │ 3 files, 2.15 KiB  │  ● Sharing                                              │
    └──────────────────────────────────────────────────────────────────────────────┘
    ┌──────────────────────────────────────────────────────────────────────────────┐
    │  a.txt                                                                  100 B│
    │  b.txt                                                                   50 B│
    │  music/                                                                 2 KiB│
    │                                                                              │
    │                                                                              │
    └──────────────────────────────────────────────────────────────────────────────┘
                            Sharing started, selection locked

    ");
}

#[test]
fn test_confirm_delete_snapshot() {
    let (_temp, mut app) = populated_app();
    press(&mut app, 'd');
    assert_eq!(app.mode, Mode::Confirm(ConfirmAction::Delete));

    let output = render_to_string(&app, 80, 12);
    assert_snapshot!(output, @r"
    ┌ Share Selection ─────────────────────────────────────────────────────────────┐
    │ 3 files, 2.15 KiB  │  ○ Not sharing                                          │
    └──────────────┌ Remove ────────────────────────────────────────┐──────────────┘
    ┌──────────────│          Remove 'a.txt' from the list?         │──────────────┐
    │  a.txt       │                                                │         100 B│
    │  b.txt       │                   [y]es  [n]o                  │          50 B│
    │  music/      │                                                │         2 KiB│
    │              │                                                │              │
    │              └────────────────────────────────────────────────┘              │
    └──────────────────────────────────────────────────────────────────────────────┘
                                     [y] Yes  [n] No

    ");
}

#[test]
fn test_alert_snapshot() {
    let mut app = App::new(SelectionController::default(), &TuiConfig::default());
    app.alert = Some("/srv/missing.txt is not a readable file.".to_string());
    app.mode = Mode::Alert;

    let output = render_to_string(&app, 80, 12);
    assert_snapshot!(output, @r"
    ┌ Share Selection ─────────────────────────────────────────────────────────────┐
    │   │  ○ Not sharing                                                           │
    └──────────────────────────────────────────────────────────────────────────────┘
    ┌─────────┌ Error ───────────────────────────────────────────────────┐─────────┐
    │         │/srv/missing.txt is not a readable file.                  │         │
    │         │                                                          │         │
    │         │[Enter] OK                                                │         │
    │         └──────────────────────────────────────────────────────────┘         │
    │                                                                              │
    └──────────────────────────────────────────────────────────────────────────────┘
                                       [Enter] OK

    ");
}
