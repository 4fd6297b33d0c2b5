use ratatui::{prelude::*, widgets::*};

use crate::{
    shortcuts::Shortcut,
    state::{TaskStatus, TaskStatusType},
    theme::Theme,
};

/// Render key hints on the left and the last task status on the right
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    hints: &[Shortcut],
    status: Option<&TaskStatus>,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    for hint in hints {
        if hint.enabled {
            spans.push(Span::styled(format!(" {} ", hint.key_display), theme.key_hint()));
            spans.push(Span::styled(format!("{} ", hint.description), theme.key_description()));
        } else {
            spans.push(Span::styled(
                format!(" {} {} ", hint.key_display, hint.description),
                theme.key_disabled(),
            ));
        }
    }

    let bar = Block::default().style(Style::default().bg(theme.bg_secondary));
    f.render_widget(bar, area);
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(status) = status {
        let color = match status.status_type {
            TaskStatusType::Success => theme.status_success,
            TaskStatusType::Error => theme.status_warning,
        };
        let text = Paragraph::new(format!("{} ", status.message))
            .style(Style::default().fg(color))
            .alignment(Alignment::Right);
        f.render_widget(text, area);
    }
}
