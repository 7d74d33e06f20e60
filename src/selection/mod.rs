mod controller;
mod entry;
mod fs;
mod size;
mod view;

pub use controller::{BatchReport, ControllerState, SelectionController, SelectionEvent};
pub use entry::{normalize_path, SelectionEntry};
pub use fs::{FileSystemAccess, LocalFileSystem, Measurement};
pub use size::format_size;
pub use view::{Affordances, ViewState};
