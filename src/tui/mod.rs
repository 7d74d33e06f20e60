//! TUI module for interactive selection editing.

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::error::Result;
use crate::selection::{LocalFileSystem, SelectionController};

pub use app::App;

/// Run the TUI, starting from `paths` as if they had been dropped onto the list.
pub fn run(paths: Vec<PathBuf>, follow_symlinks: bool, config: &Config) -> Result<()> {
    let fs = LocalFileSystem::new()
        .with_follow_symlinks(follow_symlinks || config.selection.follow_symlinks);
    let mut app = App::new(SelectionController::new(fs), &config.tui);
    if !paths.is_empty() {
        app.add_paths(paths);
    }

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);

    run_app(&mut terminal, &mut app, tick_rate)
}

/// Raw mode and the alternate screen, undone on drop even if setup fails
/// halfway.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "Failed to leave raw mode");
        }
        if let Err(err) = restore_screen(&mut io::stdout()) {
            tracing::warn!(%err, "Failed to restore terminal screen");
        }
    }
}

fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, tick_rate)?;
        app.sync();
    }

    tracing::info!(
        count = app.controller.len(),
        total_size_bytes = app.controller.view_state().total_size_bytes,
        "Selection closed"
    );
    Ok(())
}
