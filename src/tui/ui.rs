//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, ConfirmAction, Mode};
use crate::selection::SelectionEntry;

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Entry list
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_list_area(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        Mode::AddPath => render_add_prompt(app, frame),
        Mode::Confirm(action) => render_confirm_dialog(app, frame, action),
        Mode::Help => render_help_overlay(frame),
        Mode::Alert => render_alert(app, frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let summary = app.controller.view_state().summary().unwrap_or_default();

    let (state, state_color) = if app.controller.is_server_running() {
        ("● Sharing", Color::Green)
    } else {
        ("○ Not sharing", Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}", summary), Style::default().fg(Color::White)),
        Span::raw("  │  "),
        Span::styled(state, Style::default().fg(state_color)),
    ]);

    let block = Block::default()
        .title(" Share Selection ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list_area(app: &App, frame: &mut Frame, area: Rect) {
    let border_color = if app.controller.is_server_running() {
        Color::Green
    } else {
        Color::Gray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let affordances = app.affordances();

    if affordances.show_drop_hint {
        let paragraph = Paragraph::new("Press 'a' to add files and folders")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.controller.entries();
    let visible_height = inner_area.height as usize;
    let scroll_offset = calculate_scroll_offset(app.selected, visible_height, entries.len());

    for (i, entry) in entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let y = inner_area.y + i as u16;
        let is_selected = affordances.selectable && scroll_offset + i == app.selected;
        let is_marked = app.marked.contains(&entry.path);

        render_entry(frame, entry, inner_area.x, y, inner_area.width, is_selected, is_marked);
    }
}

fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(padding)
    }
}

fn render_entry(
    frame: &mut Frame,
    entry: &SelectionEntry,
    x: u16,
    y: u16,
    width: u16,
    is_selected: bool,
    is_marked: bool,
) {
    let mark = if is_marked { "✓ " } else { "  " };
    let suffix = if entry.is_dir { "/" } else { "" };

    // Size column is fixed width (max "1023.9 TiB" = 10 chars)
    let size_width = 10;
    let size_str = format!("{:>width$}", entry.size_human(), width = size_width);

    let name = format!("{}{}", entry.name(), suffix);
    let name_width = (width as usize).saturating_sub(mark.chars().count() + size_width + 1);

    // Truncate on char boundaries
    let display_name = if name.chars().count() > name_width && name_width > 1 {
        let truncated: String = name.chars().take(name_width - 1).collect();
        format!("{}…", truncated)
    } else {
        name
    };
    let padding = " ".repeat(name_width.saturating_sub(display_name.chars().count()));

    let name_style = if entry.is_dir {
        Style::default().fg(Color::Blue).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let spans = vec![
        Span::styled(mark, Style::default().fg(Color::Yellow)),
        Span::styled(display_name, name_style),
        Span::raw(padding),
        Span::raw(" "),
        Span::styled(size_str, Style::default().fg(Color::Cyan)),
    ];

    let mut line = Line::from(spans);
    if is_selected {
        line = line.style(Style::default().bg(Color::DarkGray));
    }

    frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal if app.controller.is_server_running() => {
            "[s] Stop sharing  [?] Help  [q] Quit"
        }
        Mode::Normal if app.affordances().can_delete => {
            "[↑↓] Navigate  [Space] Mark  [a] Add  [d] Delete  [s] Share  [?] Help  [q] Quit"
        }
        Mode::Normal => "[a] Add  [s] Share  [?] Help  [q] Quit",
        Mode::AddPath => "[Enter] Add  [Esc] Cancel",
        Mode::Confirm(_) => "[y] Yes  [n] No",
        Mode::Help => "[Esc] Close",
        Mode::Alert => "[Enter] OK",
    };

    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn render_add_prompt(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let prompt_area = Rect {
        x: 2,
        y: area.height.saturating_sub(6),
        width: area.width.saturating_sub(4).min(70),
        height: 3,
    }
    .intersection(area);

    if prompt_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, prompt_area);

    let block = Block::default()
        .title(" Add file or folder ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(app.input.as_str())
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, prompt_area);

    // Cursor only fits inside a full-height bordered prompt
    if prompt_area.height >= 3 && prompt_area.width >= 3 {
        let max_x = prompt_area.right().saturating_sub(2);
        let x = (prompt_area.x + 1).saturating_add(app.input.chars().count() as u16);
        frame.set_cursor_position(Position::new(x.min(max_x), prompt_area.y + 1));
    }
}

fn render_confirm_dialog(app: &App, frame: &mut Frame, action: ConfirmAction) {
    let dialog_area = centered(frame.area(), 50, 7);
    frame.render_widget(Clear, dialog_area);

    let message = match action {
        ConfirmAction::Delete => {
            let targets = app.delete_targets();
            match targets.as_slice() {
                [single] => {
                    let name = single
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| single.display().to_string());
                    format!("Remove '{}' from the list?\n\n[y]es  [n]o", name)
                }
                many => format!("Remove {} items from the list?\n\n[y]es  [n]o", many.len()),
            }
        }
    };

    let block = Block::default()
        .title(" Remove ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

fn render_alert(app: &App, frame: &mut Frame) {
    let message = app.alert.as_deref().unwrap_or_default();
    let height = message.lines().count() as u16 + 4;
    let dialog_area = centered(frame.area(), 60, height);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(format!("{}\n\n[Enter] OK", message))
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, dialog_area);
}

fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered(frame.area(), 60, 18);
    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 g / G      Go to top / bottom

 SELECTION
 ─────────────────────────────────
 a          Add file or folder
 Space      Mark entry
 d/Del      Remove marked or current entry
 s          Start / stop sharing
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
