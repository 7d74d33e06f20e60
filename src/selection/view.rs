use serde::Serialize;

use super::size::format_size;

/// Read-only aggregate values over the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub count: usize,
    pub total_size_bytes: u64,
    pub is_empty: bool,
}

impl ViewState {
    /// Info line shown above the list, `None` when nothing is selected.
    pub fn summary(&self) -> Option<String> {
        if self.is_empty {
            return None;
        }
        let noun = if self.count == 1 { "file" } else { "files" };
        Some(format!(
            "{} {}, {}",
            self.count,
            noun,
            format_size(self.total_size_bytes)
        ))
    }
}

/// Which controls the presentation layer should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub can_add: bool,
    pub can_delete: bool,
    /// Rows may be highlighted and marked
    pub selectable: bool,
    /// Show the "add files here" hint in place of the list
    pub show_drop_hint: bool,
    pub show_summary: bool,
}
