use crate::state::{CopyState, Focus, RESULTS_COLUMNS, SearchPanelState, SearchState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const IDLE_PROMPT: &str = "Find unique usernames of 3 to 7 characters.";
pub const LOADING_TEXT: &str = "Searching for usernames...";
pub const EMPTY_TEXT: &str = "No suggestions found. Try another keyword.";
pub const RESULTS_HEADER: &str = "Available usernames";

/// View model for the results area - one variant per search state
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsViewModel {
    Prompt { text: &'static str },
    Loading { spinner: &'static str, text: &'static str },
    Empty { text: &'static str },
    Cards {
        header: String,
        cards: Vec<CardViewModel>,
        columns: usize,
        focused: bool,
    },
    Error { message: String },
}

/// A single suggestion card
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    /// Pre-formatted handle: "@gamer1"
    pub display_name: String,
    /// "⧉ copy" or "✓ Copied!"
    pub copy_label: &'static str,
    pub just_copied: bool,
    pub selected: bool,
}

impl ResultsViewModel {
    /// Build view model from the search panel state
    pub fn from_state(search: &SearchPanelState, spinner_frame: usize) -> Self {
        match &search.state {
            SearchState::Idle => ResultsViewModel::Prompt { text: IDLE_PROMPT },
            SearchState::Loading => ResultsViewModel::Loading {
                spinner: SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()],
                text: LOADING_TEXT,
            },
            SearchState::Success(cards) if cards.is_empty() => {
                ResultsViewModel::Empty { text: EMPTY_TEXT }
            }
            SearchState::Success(cards) => {
                let focused = search.focus == Focus::Results;
                let cards = cards
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        let just_copied = matches!(card.copy, CopyState::JustCopied { .. });
                        CardViewModel {
                            display_name: format!("@{}", card.username),
                            copy_label: if just_copied { "✓ Copied!" } else { "⧉ copy" },
                            just_copied,
                            selected: focused && i == search.selected_card,
                        }
                    })
                    .collect::<Vec<_>>();

                ResultsViewModel::Cards {
                    header: format!("{} ({})", RESULTS_HEADER, cards.len()),
                    cards,
                    columns: RESULTS_COLUMNS,
                    focused,
                }
            }
            SearchState::Error(message) => ResultsViewModel::Error {
                message: message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SuggestionCard;

    fn panel(state: SearchState) -> SearchPanelState {
        SearchPanelState {
            state,
            ..SearchPanelState::default()
        }
    }

    #[test]
    fn test_idle_shows_prompt() {
        assert_eq!(
            ResultsViewModel::from_state(&panel(SearchState::Idle), 0),
            ResultsViewModel::Prompt { text: IDLE_PROMPT }
        );
    }

    #[test]
    fn test_loading_animates_spinner() {
        let first = ResultsViewModel::from_state(&panel(SearchState::Loading), 0);
        let second = ResultsViewModel::from_state(&panel(SearchState::Loading), 1);
        assert_ne!(first, second);
        assert!(matches!(first, ResultsViewModel::Loading { text: LOADING_TEXT, .. }));
        // Wraps around
        assert_eq!(
            ResultsViewModel::from_state(&panel(SearchState::Loading), SPINNER_FRAMES.len()),
            first
        );
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        assert_eq!(
            ResultsViewModel::from_state(&panel(SearchState::Success(Vec::new())), 0),
            ResultsViewModel::Empty { text: EMPTY_TEXT }
        );
    }

    #[test]
    fn test_error_carries_message() {
        assert_eq!(
            ResultsViewModel::from_state(&panel(SearchState::Error("boom".into())), 0),
            ResultsViewModel::Error {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn test_cards_show_handle_and_copy_feedback() {
        let mut copied = SuggestionCard::new("pro_gm");
        copied.copy = CopyState::JustCopied { token: 3 };
        let mut search = panel(SearchState::Success(vec![
            SuggestionCard::new("gamer1"),
            copied,
        ]));
        search.focus = Focus::Results;
        search.selected_card = 1;

        let ResultsViewModel::Cards {
            header,
            cards,
            columns,
            focused,
        } = ResultsViewModel::from_state(&search, 0)
        else {
            panic!("expected cards");
        };

        assert_eq!(header, "Available usernames (2)");
        assert_eq!(columns, 3);
        assert!(focused);
        assert_eq!(cards[0].display_name, "@gamer1");
        assert_eq!(cards[0].copy_label, "⧉ copy");
        assert!(!cards[0].selected);
        assert_eq!(cards[1].copy_label, "✓ Copied!");
        assert!(cards[1].just_copied);
        assert!(cards[1].selected);
    }

    #[test]
    fn test_selection_hidden_without_focus() {
        let search = panel(SearchState::Success(vec![SuggestionCard::new("gamer1")]));
        let ResultsViewModel::Cards { cards, .. } = ResultsViewModel::from_state(&search, 0) else {
            panic!("expected cards");
        };
        assert!(!cards[0].selected);
    }
}
