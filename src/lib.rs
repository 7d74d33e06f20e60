//! Share Selection - build a list of files and folders to share
//!
//! This crate provides functionality for:
//! - Maintaining a deduplicated, path-sorted selection with size totals
//! - Locking the selection while a sharing session is active
//! - Interactive TUI and one-shot listing front ends

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod selection;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SelectionError};
pub use selection::{SelectionController, SelectionEntry, SelectionEvent, ViewState};
