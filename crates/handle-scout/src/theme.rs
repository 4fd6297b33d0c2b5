use ratatui::{prelude::*, style::palette::tailwind};

/// Colors and prebuilt styles shared by every view
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Title, focused panel, debug console frame
    pub accent_primary: Color,
    /// Key hints, usernames, log targets
    pub accent_secondary: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    pub selected_border: Color,
    pub card_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

impl Theme {
    /// Zinc background with violet and sky accents
    pub fn night() -> Self {
        Self {
            bg_primary: tailwind::ZINC.c950,
            bg_secondary: tailwind::ZINC.c900,
            bg_card: tailwind::ZINC.c800,

            text_primary: tailwind::ZINC.c100,
            text_secondary: tailwind::ZINC.c400,
            text_muted: tailwind::ZINC.c600,

            accent_primary: tailwind::VIOLET.c400,
            accent_secondary: tailwind::SKY.c300,

            status_success: tailwind::EMERALD.c400,
            status_error: tailwind::ROSE.c400,
            status_warning: tailwind::AMBER.c300,
            status_info: tailwind::SKY.c400,

            selected_border: tailwind::VIOLET.c300,
            card_border: tailwind::ZINC.c700,
        }
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        let color = if focused {
            self.accent_primary
        } else {
            self.card_border
        };
        Style::default().fg(color)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// The key half of a footer hint ("Enter" in "Enter search")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Hint for a key that does nothing right now, e.g. Enter while loading
    pub fn key_disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn error_alert(&self) -> Style {
        Style::default().fg(self.status_error).bg(tailwind::ROSE.c950)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_panel_stands_out() {
        let theme = Theme::default();
        assert_ne!(theme.panel_border(true), theme.panel_border(false));
        assert_eq!(theme.panel_border(true).fg, Some(theme.accent_primary));
    }
}
