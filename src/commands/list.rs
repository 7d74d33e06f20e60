//! List command implementation

use serde::Serialize;

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::selection::{FileSystemAccess, LocalFileSystem, SelectionController, SelectionEntry};

#[derive(Serialize)]
struct ListOutput<'a> {
    entries: &'a [SelectionEntry],
    count: usize,
    total_size_bytes: u64,
}

/// Run the list command
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    let fs = LocalFileSystem::new()
        .with_follow_symlinks(args.follow_symlinks || config.selection.follow_symlinks);
    let mut controller = SelectionController::new(fs);

    tracing::info!(count = args.paths.len(), "Building selection");

    let report = controller.add_entries(&args.paths);
    for err in &report.failed {
        eprintln!("{}", err);
    }

    let output = if args.json {
        format_json(&controller)?
    } else {
        format_text(&controller)
    };

    println!("{}", output);

    Ok(())
}

/// One label per entry followed by the summary line
pub fn format_text<F: FileSystemAccess>(controller: &SelectionController<F>) -> String {
    let mut lines: Vec<String> = controller
        .entries()
        .iter()
        .map(|entry| {
            let marker = if entry.is_dir { "/" } else { "" };
            format!(
                "{}{} ({})  {}",
                entry.name(),
                marker,
                entry.size_human(),
                entry.path.display()
            )
        })
        .collect();

    let summary = controller
        .view_state()
        .summary()
        .unwrap_or_else(|| "Nothing selected".to_string());

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(summary);
    lines.join("\n")
}

pub fn format_json<F: FileSystemAccess>(controller: &SelectionController<F>) -> Result<String> {
    let view = controller.view_state();
    let output = ListOutput {
        entries: controller.entries(),
        count: view.count,
        total_size_bytes: view.total_size_bytes,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
