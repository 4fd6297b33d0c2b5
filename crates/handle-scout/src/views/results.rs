use ratatui::{prelude::*, widgets::*};

use crate::{
    theme::Theme,
    view_models::results::{CardViewModel, ResultsViewModel},
};

/// Height of one suggestion card including borders
const CARD_HEIGHT: u16 = 3;

/// Render the results area for the current search state
pub fn render_results(f: &mut Frame, area: Rect, view_model: &ResultsViewModel, theme: &Theme) {
    match view_model {
        ResultsViewModel::Prompt { text } => {
            render_centered_text(f, area, text, Style::default().fg(theme.text_muted));
        }
        ResultsViewModel::Loading { spinner, text } => {
            let line = format!("{} {}", spinner, text);
            render_centered_text(
                f,
                area,
                &line,
                Style::default()
                    .fg(theme.status_info)
                    .add_modifier(Modifier::BOLD),
            );
        }
        ResultsViewModel::Empty { text } => {
            render_centered_text(f, area, text, Style::default().fg(theme.text_secondary));
        }
        ResultsViewModel::Error { message } => {
            let alert_area = centered_rect(area, 70, 5);
            let alert = Paragraph::new(message.as_str())
                .style(theme.error_alert())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .title(" ✗ Error ")
                        .border_style(Style::default().fg(theme.status_error)),
                );
            f.render_widget(alert, alert_area);
        }
        ResultsViewModel::Cards {
            header,
            cards,
            columns,
            focused,
        } => render_cards(f, area, header, cards, *columns, *focused, theme),
    }
}

fn render_cards(
    f: &mut Frame,
    area: Rect,
    header: &str,
    cards: &[CardViewModel],
    columns: usize,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Line::from(format!(" {} ", header)).centered())
        .title_style(theme.title())
        .border_style(theme.panel_border(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = columns.max(1);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Keep the selected card's row on screen
    let selected_row = cards.iter().position(|c| c.selected).unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= cards.len() {
            break;
        }
        let cell_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (card, cell) in cards[start..].iter().take(columns).zip(cell_areas.iter()) {
            render_card(f, *cell, card, theme);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &CardViewModel, theme: &Theme) {
    let border_style = if card.selected {
        Style::default()
            .fg(theme.selected_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.card_border)
    };

    let label_style = if card.just_copied {
        Style::default()
            .fg(theme.status_success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent_primary)
    };

    let line = Line::from(vec![
        Span::styled(
            card.display_name.as_str(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(card.copy_label, label_style),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg_card)),
    );
    f.render_widget(widget, area);
}

fn render_centered_text(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = centered_rect(area, 100, 1);
    f.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        text_area,
    );
}

/// Horizontally `percent_x` wide, `height` tall, centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
