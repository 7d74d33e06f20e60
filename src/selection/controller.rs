//! The selection set and its editable/locked state.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{Result, SelectionError};

use super::entry::{normalize_path, SelectionEntry};
use super::fs::{FileSystemAccess, LocalFileSystem};
use super::view::{Affordances, ViewState};

/// Notification sent to subscribers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Entries or server state changed; re-render labels and list.
    Updated,
    /// Number of entries after an add or remove.
    ItemCountChanged(usize),
}

/// Whether the selection may currently be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Server stopped, add/remove permitted.
    Editable,
    /// Server running, add/remove forbidden by contract.
    Locked,
}

/// Outcome of adding a batch of paths, each evaluated independently.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub added: Vec<PathBuf>,
    pub duplicates: Vec<PathBuf>,
    pub failed: Vec<SelectionError>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Maintains a deduplicated, path-sorted list of files and folders.
pub struct SelectionController<F = LocalFileSystem> {
    fs: F,
    entries: Vec<SelectionEntry>,
    server_running: bool,
    subscribers: Vec<Sender<SelectionEvent>>,
}

impl Default for SelectionController<LocalFileSystem> {
    fn default() -> Self {
        Self::new(LocalFileSystem::new())
    }
}

impl<F: FileSystemAccess> SelectionController<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            entries: Vec::new(),
            server_running: false,
            subscribers: Vec::new(),
        }
    }

    /// Receive events for every subsequent mutation.
    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Add a file or folder. Adding a path that is already selected is a no-op.
    pub fn add_entry<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.insert(path.as_ref()).map(|_| ())
    }

    /// Add several paths; one failure does not stop the others.
    pub fn add_entries<I, P>(&mut self, paths: I) -> BatchReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = BatchReport::default();

        for path in paths {
            let path = path.as_ref();
            match self.insert(path) {
                Ok(true) => report.added.push(normalize_path(path)),
                Ok(false) => report.duplicates.push(normalize_path(path)),
                Err(err) => {
                    tracing::debug!(%err, "Rejected selection candidate");
                    report.failed.push(err);
                }
            }
        }

        report
    }

    /// Remove a path. Returns false, without signalling, if it was not selected.
    pub fn remove_entry<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.warn_if_locked("remove");

        if !self.take(path.as_ref()) {
            return false;
        }

        self.emit_count_change();
        true
    }

    /// Remove every listed path that is selected, signalling once.
    pub fn remove_entries<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.warn_if_locked("remove");

        let removed = paths
            .into_iter()
            .filter(|p| self.take(p.as_ref()))
            .count();

        if removed > 0 {
            self.emit_count_change();
        }
        removed
    }

    pub fn set_server_running(&mut self, running: bool) {
        if running != self.server_running {
            tracing::info!(running, "Sharing state changed");
        }
        self.server_running = running;
        self.emit(SelectionEvent::Updated);
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            count: self.entries.len(),
            total_size_bytes: self.entries.iter().map(|e| e.size_bytes).sum(),
            is_empty: self.entries.is_empty(),
        }
    }

    /// Controls to offer given whether the user has a row selected.
    pub fn affordances(&self, has_selection: bool) -> Affordances {
        let editable = self.is_editable();
        Affordances {
            can_add: editable,
            can_delete: editable && has_selection,
            selectable: editable,
            show_drop_hint: self.entries.is_empty(),
            show_summary: !self.entries.is_empty(),
        }
    }

    /// Entries in path order
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&SelectionEntry> {
        let path = normalize_path(path.as_ref());
        self.position(&path).ok().map(|idx| &self.entries[idx])
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_server_running(&self) -> bool {
        self.server_running
    }

    pub fn state(&self) -> ControllerState {
        if self.server_running {
            ControllerState::Locked
        } else {
            ControllerState::Editable
        }
    }

    pub fn is_editable(&self) -> bool {
        self.state() == ControllerState::Editable
    }

    /// Returns Ok(false) for a duplicate.
    fn insert(&mut self, candidate: &Path) -> Result<bool> {
        self.warn_if_locked("add");

        let path = normalize_path(candidate);
        let idx = match self.position(&path) {
            Ok(_) => {
                tracing::debug!(path = %path.display(), "Already selected");
                return Ok(false);
            }
            Err(idx) => idx,
        };

        if !self.fs.is_readable(&path) {
            return Err(SelectionError::UnreadablePath(path));
        }

        let measurement = self.fs.measure(&path).map_err(|source| SelectionError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            is_dir = measurement.is_dir,
            size_bytes = measurement.size_bytes,
            "Added to selection"
        );

        self.entries.insert(
            idx,
            SelectionEntry::new(path, measurement.is_dir, measurement.size_bytes),
        );
        self.emit_count_change();

        Ok(true)
    }

    fn take(&mut self, candidate: &Path) -> bool {
        let path = normalize_path(candidate);
        match self.position(&path) {
            Ok(idx) => {
                self.entries.remove(idx);
                tracing::info!(path = %path.display(), "Removed from selection");
                true
            }
            Err(_) => {
                tracing::debug!(path = %path.display(), "Not selected, nothing to remove");
                false
            }
        }
    }

    fn position(&self, path: &Path) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|e| e.path_order(path))
    }

    fn warn_if_locked(&self, operation: &str) {
        if self.server_running {
            tracing::warn!(operation, "Selection modified while sharing is active");
        }
    }

    fn emit_count_change(&mut self) {
        self.emit(SelectionEvent::Updated);
        self.emit(SelectionEvent::ItemCountChanged(self.entries.len()));
    }

    fn emit(&mut self, event: SelectionEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
