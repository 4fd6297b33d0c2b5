use ratatui::{prelude::*, widgets::*};

use crate::{
    state::{Focus, SearchPanelState},
    theme::Theme,
};

const PLACEHOLDER: &str = "Enter a keyword (e.g. game, art, tech)";

/// Render the keyword input. The submit hint is greyed out while a search runs.
pub fn render_search_bar(f: &mut Frame, area: Rect, search: &SearchPanelState, theme: &Theme) {
    let focused = search.focus == Focus::Input;
    let loading = search.state.is_loading();

    let submit_hint = if loading {
        Line::from(Span::styled(" Enter search ", theme.key_disabled()))
    } else {
        Line::from(vec![
            Span::styled(" Enter ", theme.key_hint()),
            Span::styled("search ", theme.key_description()),
        ])
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(" Keyword ")
        .title(submit_hint.right_aligned())
        .border_style(theme.panel_border(focused))
        .style(Style::default().bg(theme.bg_secondary));

    let content = if search.keyword.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            search.keyword.as_str(),
            Style::default().fg(theme.text_primary),
        ))
    };

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        let cursor_x = inner
            .x
            .saturating_add(search.keyword.chars().count() as u16)
            .min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
