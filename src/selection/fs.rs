use nix::unistd::{access, AccessFlags};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Result of measuring a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub is_dir: bool,
    pub size_bytes: u64,
}

/// Filesystem queries the selection controller depends on.
pub trait FileSystemAccess {
    /// Whether the current process may read `path`
    fn is_readable(&self, path: &Path) -> bool;

    /// Stat `path`, summing file sizes recursively for directories
    fn measure(&self, path: &Path) -> io::Result<Measurement>;
}

/// The real filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    follow_symlinks: bool,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether directory traversal follows symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn dir_size(&self, root: &Path) -> u64 {
        let mut total = 0;

        for result in WalkDir::new(root).follow_links(self.follow_symlinks) {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(%err, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.metadata() {
                Ok(m) => total += m.len(),
                Err(err) => {
                    tracing::debug!(path = %entry.path().display(), %err, "Skipping entry");
                }
            }
        }

        total
    }
}

impl FileSystemAccess for LocalFileSystem {
    fn is_readable(&self, path: &Path) -> bool {
        access(path, AccessFlags::R_OK).is_ok()
    }

    fn measure(&self, path: &Path) -> io::Result<Measurement> {
        let metadata = fs::metadata(path)?;

        if metadata.is_dir() {
            let size_bytes = self.dir_size(path);
            tracing::debug!(path = %path.display(), size_bytes, "Measured directory");
            Ok(Measurement {
                is_dir: true,
                size_bytes,
            })
        } else {
            Ok(Measurement {
                is_dir: false,
                size_bytes: metadata.len(),
            })
        }
    }
}
