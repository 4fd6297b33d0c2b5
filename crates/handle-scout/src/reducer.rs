use ::log::debug;

use crate::{actions::Action, config::Config, effect::Effect, state::*};

/// Shown when a search fails without a usable message
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns new state and effects
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    let (ui, ui_effects) = ui_reducer(state.ui, action);
    state.ui = ui;
    effects.extend(ui_effects);

    let (search, search_effects) = search_reducer(state.search, action, &state.config);
    state.search = search;
    let search_started = search_effects
        .iter()
        .any(|effect| matches!(effect, Effect::FetchSuggestions { .. }));
    effects.extend(search_effects);

    state.task = task_reducer(state.task, action, search_started);
    state.debug_console = debug_console_reducer(state.debug_console, action);

    (state, effects)
}

/// UI state reducer - handles bootstrap, quit and spinner
fn ui_reducer(mut state: UiState, action: &Action) -> (UiState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::Bootstrap => {
            effects.push(Effect::LoadEnvFile);
            effects.push(Effect::InitializeProvider);
        }
        Action::Quit => {
            state.should_quit = true;
        }
        Action::TickSpinner => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
        }
        _ => {}
    }

    (state, effects)
}

/// Search controller: keyword editing, the Idle/Loading/Success/Error
/// machine, card selection and copy feedback
fn search_reducer(
    mut state: SearchPanelState,
    action: &Action,
    config: &Config,
) -> (SearchPanelState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::KeywordInput(c) => {
            state.keyword.push(*c);
        }
        Action::KeywordBackspace => {
            state.keyword.pop();
        }
        Action::KeywordClear => {
            state.keyword.clear();
        }
        Action::Submit => {
            let keyword = state.keyword.trim().to_string();
            if keyword.is_empty() {
                debug!("Ignoring submit with blank keyword");
            } else if state.state.is_loading() {
                debug!("Ignoring submit while search #{} is in flight", state.request_id);
            } else {
                state.request_id += 1;
                state.state = SearchState::Loading;
                state.focus = Focus::Input;
                state.selected_card = 0;
                debug!("Starting search #{} for '{}'", state.request_id, keyword);
                effects.push(Effect::FetchSuggestions {
                    request_id: state.request_id,
                    keyword,
                });
            }
        }
        Action::SuggestionsLoaded { request_id, result } => {
            if *request_id != state.request_id || !state.state.is_loading() {
                debug!(
                    "Discarding stale response for search #{} (latest #{})",
                    request_id, state.request_id
                );
            } else {
                state.state = match result {
                    Ok(usernames) => {
                        debug!("Search #{} found {} usernames", request_id, usernames.len());
                        SearchState::Success(
                            usernames.iter().map(SuggestionCard::new).collect(),
                        )
                    }
                    Err(message) if message.trim().is_empty() => {
                        SearchState::Error(UNKNOWN_ERROR_MESSAGE.to_string())
                    }
                    Err(message) => SearchState::Error(message.clone()),
                };
                state.selected_card = 0;
            }
        }
        Action::FocusNext => {
            state.focus = match state.focus {
                Focus::Input if !state.state.cards().is_empty() => Focus::Results,
                _ => Focus::Input,
            };
        }
        Action::SelectNextCard => {
            let count = state.state.cards().len();
            if count > 0 {
                state.selected_card = (state.selected_card + 1) % count;
            }
        }
        Action::SelectPrevCard => {
            let count = state.state.cards().len();
            if count > 0 {
                state.selected_card = (state.selected_card + count - 1) % count;
            }
        }
        Action::SelectCardBelow => {
            let below = state.selected_card + RESULTS_COLUMNS;
            if below < state.state.cards().len() {
                state.selected_card = below;
            }
        }
        Action::SelectCardAbove => {
            if state.selected_card >= RESULTS_COLUMNS {
                state.selected_card -= RESULTS_COLUMNS;
            }
        }
        Action::CopySelected => {
            let index = state.selected_card;
            effects.extend(start_copy(&mut state, index, config.copy_feedback_ms));
        }
        Action::CopyCard(index) => {
            effects.extend(start_copy(&mut state, *index, config.copy_feedback_ms));
        }
        Action::CopyFeedbackExpired { index, token } => {
            if let SearchState::Success(cards) = &mut state.state
                && let Some(card) = cards.get_mut(*index)
                && card.copy == (CopyState::JustCopied { token: *token })
            {
                card.copy = CopyState::Idle;
            }
        }
        _ => {}
    }

    (state, effects)
}

/// Flip a card to `JustCopied` with a fresh token and request the clipboard
/// write plus the reset timer. Re-activation supersedes any pending timer.
fn start_copy(state: &mut SearchPanelState, index: usize, delay_ms: u64) -> Vec<Effect> {
    let SearchState::Success(cards) = &mut state.state else {
        return Vec::new();
    };
    let Some(card) = cards.get_mut(index) else {
        return Vec::new();
    };

    state.copy_token += 1;
    let token = state.copy_token;
    card.copy = CopyState::JustCopied { token };

    vec![
        Effect::CopyToClipboard {
            text: card.username.clone(),
        },
        Effect::ScheduleCopyReset {
            index,
            token,
            delay_ms,
        },
    ]
}

/// Task status reducer - status line feedback for clipboard writes
fn task_reducer(mut state: TaskState, action: &Action, search_started: bool) -> TaskState {
    if search_started {
        state.status = None;
    }

    match action {
        Action::ClipboardResult(result) => {
            state.status = Some(match result {
                Ok(username) => TaskStatus {
                    message: format!("Copied @{} to clipboard", username),
                    status_type: TaskStatusType::Success,
                },
                Err(err) => TaskStatus {
                    message: format!("Clipboard unavailable: {}", err),
                    status_type: TaskStatusType::Error,
                },
            });
        }
        _ => {}
    }

    state
}

/// Debug console reducer
fn debug_console_reducer(mut state: DebugConsoleState, action: &Action) -> DebugConsoleState {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
        }
        Action::ScrollDebugConsoleUp => {
            if state.auto_scroll {
                // Leave follow mode from where the view currently is
                state.scroll_offset = state.tail_start();
                state.auto_scroll = false;
            }
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        Action::ScrollDebugConsoleDown => {
            if state.auto_scroll {
                state.scroll_offset = state.tail_start();
                state.auto_scroll = false;
            }
            state.scroll_offset = (state.scroll_offset + 1).min(state.tail_start());
        }
        Action::TerminalResized(height) => {
            state.screen_height = *height;
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        _ => {}
    }

    state
}
