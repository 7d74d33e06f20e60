//! Application state for the TUI.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::config::TuiConfig;
use crate::selection::{Affordances, SelectionController, SelectionEntry, SelectionEvent};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Typing a path to add.
    AddPath,
    /// Confirmation dialog mode.
    Confirm(ConfirmAction),
    /// Help overlay mode.
    Help,
    /// Blocking notification, dismissed with Enter or Esc.
    Alert,
}

/// Action requiring confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove the marked entries, or the one under the cursor.
    Delete,
}

/// Main application state for the TUI.
pub struct App {
    /// The selection being edited.
    pub controller: SelectionController,

    /// Cursor position in the entry list.
    pub selected: usize,

    /// Paths marked for removal.
    pub marked: BTreeSet<PathBuf>,

    /// Current UI mode.
    pub mode: Mode,

    /// Add-path prompt input.
    pub input: String,

    /// Message shown in `Mode::Alert`.
    pub alert: Option<String>,

    /// Ask before removing entries.
    pub confirm_delete: bool,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    events: Receiver<SelectionEvent>,
}

impl App {
    /// Create a new App instance.
    pub fn new(mut controller: SelectionController, config: &TuiConfig) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            selected: 0,
            marked: BTreeSet::new(),
            mode: Mode::Normal,
            input: String::new(),
            alert: None,
            confirm_delete: config.confirm_delete,
            should_quit: false,
            status_message: None,
            events,
        }
    }

    /// Get the entry under the cursor, if rows are selectable.
    pub fn selected_entry(&self) -> Option<&SelectionEntry> {
        if !self.controller.is_editable() {
            return None;
        }
        self.controller.entries().get(self.selected)
    }

    pub fn affordances(&self) -> Affordances {
        let has_selection = self.selected_entry().is_some() || !self.marked.is_empty();
        self.controller.affordances(has_selection)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_last(&mut self) {
        self.selected = self.controller.len().saturating_sub(1);
    }

    /// Mark or unmark the entry under the cursor.
    pub fn toggle_mark(&mut self) {
        if !self.affordances().selectable {
            self.status_message = Some(locked_message());
            return;
        }
        let Some(path) = self.selected_entry().map(|e| e.path.clone()) else {
            return;
        };
        if !self.marked.remove(&path) {
            self.marked.insert(path);
        }
    }

    /// Open the add-path prompt.
    pub fn begin_add(&mut self) {
        if !self.affordances().can_add {
            self.status_message = Some(locked_message());
            return;
        }
        self.input.clear();
        self.mode = Mode::AddPath;
    }

    /// Add the path typed at the prompt.
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.mode = Mode::Normal;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        self.add_paths(vec![PathBuf::from(trimmed)]);
    }

    /// Add a batch of paths, as from a drop or a picker. Unreadable paths
    /// raise an alert; the readable ones are still added.
    pub fn add_paths(&mut self, paths: Vec<PathBuf>) {
        let report = self.controller.add_entries(&paths);
        self.sync();

        if report.failed.is_empty() {
            self.status_message = match report.added.len() {
                0 => Some("Already selected".to_string()),
                1 => Some("Added 1 item".to_string()),
                n => Some(format!("Added {} items", n)),
            };
            return;
        }

        let message = report
            .failed
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.alert = Some(message);
        self.mode = Mode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mode = Mode::Normal;
    }

    /// Paths a delete would remove: the marked set, else the cursor row.
    pub fn delete_targets(&self) -> Vec<PathBuf> {
        if !self.marked.is_empty() {
            return self.marked.iter().cloned().collect();
        }
        self.selected_entry()
            .map(|e| vec![e.path.clone()])
            .unwrap_or_default()
    }

    /// Delete key pressed.
    pub fn request_delete(&mut self) {
        if !self.controller.is_editable() {
            self.status_message = Some(locked_message());
            return;
        }
        if self.delete_targets().is_empty() {
            return;
        }
        if self.confirm_delete {
            self.mode = Mode::Confirm(ConfirmAction::Delete);
        } else {
            self.delete_selected();
        }
    }

    pub fn delete_selected(&mut self) {
        let targets = self.delete_targets();
        let removed = self.controller.remove_entries(&targets);
        self.marked.clear();
        self.sync();

        self.status_message = Some(match removed {
            1 => "Removed 1 item".to_string(),
            n => format!("Removed {} items", n),
        });
    }

    /// Start or stop sharing. The selection is locked while sharing.
    pub fn toggle_sharing(&mut self) {
        let running = !self.controller.is_server_running();
        self.controller.set_server_running(running);
        self.sync();

        self.status_message = Some(if running {
            "Sharing started, selection locked".to_string()
        } else {
            "Sharing stopped".to_string()
        });
    }

    /// Apply pending controller events to view state.
    pub fn sync(&mut self) {
        if self.events.try_iter().count() == 0 {
            return;
        }

        let len = self.controller.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }

        if self.controller.is_editable() {
            let controller = &self.controller;
            self.marked.retain(|p| controller.contains(p));
        } else {
            self.marked.clear();
        }
    }
}

fn locked_message() -> String {
    "Selection is locked while sharing".to_string()
}
