use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use super::size::format_size;

/// A file or folder tracked by the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    /// Absolute, lexically normalized path
    pub path: PathBuf,

    /// True if this is a directory
    pub is_dir: bool,

    /// File length, or the recursive sum of file lengths for a directory
    pub size_bytes: u64,
}

impl SelectionEntry {
    pub fn new(path: PathBuf, is_dir: bool, size_bytes: u64) -> Self {
        Self {
            path,
            is_dir,
            size_bytes,
        }
    }

    /// Last path component, or the whole path for a filesystem root.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn size_human(&self) -> String {
        format_size(self.size_bytes)
    }

    /// List label, e.g. `report.pdf (1.50 KiB)`
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name(), self.size_human())
    }

    /// Display order: byte-wise comparison of the path string.
    pub fn path_order(&self, other: &Path) -> Ordering {
        self.path.as_os_str().cmp(other.as_os_str())
    }
}

/// Make `path` absolute against the working directory and drop `.`
/// components plus trailing or repeated separators. Symlinks and `..`
/// are left alone.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "Cannot resolve working directory");
                path.to_path_buf()
            }
        }
    };

    absolute.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_and_label() {
        let entry = SelectionEntry::new(PathBuf::from("/tmp/a.txt"), false, 100);
        assert_eq!(entry.name(), "a.txt");
        assert_eq!(entry.display_label(), "a.txt (100 B)");
    }

    #[test]
    fn test_root_entry_name() {
        let entry = SelectionEntry::new(PathBuf::from("/"), true, 0);
        assert_eq!(entry.name(), "/");
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(
            normalize_path(Path::new("/tmp/photos/")),
            PathBuf::from("/tmp/photos")
        );
        assert_eq!(
            normalize_path(Path::new("/tmp//./photos")),
            PathBuf::from("/tmp/photos")
        );
    }

    #[test]
    fn test_normalize_keeps_parent_components() {
        assert_eq!(
            normalize_path(Path::new("/tmp/a/../b")),
            PathBuf::from("/tmp/a/../b")
        );
    }

    #[test]
    fn test_normalize_relative_is_absolute() {
        let normalized = normalize_path(Path::new("some/file.txt"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("some/file.txt"));
    }

    #[test]
    fn test_path_order_is_bytewise() {
        // Component-wise ordering would put "/tmp/a/b" first.
        let spaced = SelectionEntry::new(PathBuf::from("/tmp/a b"), false, 0);
        assert_eq!(spaced.path_order(Path::new("/tmp/a/b")), Ordering::Less);
    }
}
