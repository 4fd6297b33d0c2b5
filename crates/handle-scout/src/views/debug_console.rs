use ::log::Level;
use ratatui::{prelude::*, widgets::*};

use crate::{log_capture::LogEntry, state::DebugConsoleState, theme::Theme};

/// First entry to show and how many fit, given the console's scroll mode
fn visible_window(total: usize, rows: usize, offset: usize, follow: bool) -> (usize, usize) {
    let last_start = total.saturating_sub(rows);
    let start = if follow { last_start } else { offset.min(last_start) };
    (start, rows.min(total - start))
}

fn level_color(level: Level, theme: &Theme) -> Color {
    match level {
        Level::Error => theme.status_error,
        Level::Warn => theme.status_warning,
        Level::Info => theme.status_info,
        Level::Debug => theme.text_secondary,
        Level::Trace => theme.text_muted,
    }
}

fn entry_line<'a>(entry: &'a LogEntry, theme: &Theme) -> Line<'a> {
    // handle_scout_ai::provider -> provider
    let module = entry.target.rsplit("::").next().unwrap_or(&entry.target);

    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S%.3f ").to_string(),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            format!("{:<5} ", entry.level),
            Style::default()
                .fg(level_color(entry.level, theme))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<12} ", module),
            Style::default().fg(theme.accent_secondary),
        ),
        Span::styled(entry.message.as_str(), Style::default().fg(theme.text_primary)),
    ])
}

/// Log overlay dropping down from the top of the screen
pub fn render_debug_console(f: &mut Frame, area: Rect, console: &DebugConsoleState, theme: &Theme) {
    let height = console.panel_height(area.height);
    let console_area = Rect { height, ..area };

    let Ok(logs) = console.logs.lock() else {
        return;
    };

    let rows = height.saturating_sub(2) as usize;
    let (start, shown) = visible_window(logs.len(), rows, console.scroll_offset, console.auto_scroll);
    let lines: Vec<Line> = logs
        .iter()
        .skip(start)
        .take(shown)
        .map(|entry| entry_line(entry, theme))
        .collect();

    let mode = if console.auto_scroll { "follow" } else { "paused" };
    let block = Block::bordered()
        .title(format!(" Logs {}/{} ({}) ", start + shown, logs.len(), mode))
        .title_bottom(" Ctrl+D close  j/k scroll  a follow  c clear ")
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_secondary));

    f.render_widget(Clear, console_area);
    f.render_widget(Paragraph::new(lines).block(block), console_area);
}
