use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{actions::Action, state::Focus};

/// What the event handler needs to know about the UI to map a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub focus: Focus,
    pub debug_console_open: bool,
}

/// A key hint shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
    /// False when the action exists but is currently unavailable
    pub enabled: bool,
}

impl Shortcut {
    fn new(key_display: &'static str, description: &'static str) -> Self {
        Self {
            key_display,
            description,
            enabled: true,
        }
    }
}

/// Map a key press to an action for the given UI context
pub fn handle_key_event(key: KeyEvent, ctx: &KeyContext) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys first
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('d') if ctrl => return Action::ToggleDebugConsole,
        _ => {}
    }

    if ctx.debug_console_open {
        return match key.code {
            KeyCode::Esc => Action::ToggleDebugConsole,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDebugConsoleUp,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            _ => Action::None,
        };
    }

    match ctx.focus {
        Focus::Input => match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Submit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down => Action::FocusNext,
            KeyCode::Backspace => Action::KeywordBackspace,
            KeyCode::Char('u') if ctrl => Action::KeywordClear,
            KeyCode::Char(c) if !ctrl => Action::KeywordInput(c),
            _ => Action::None,
        },
        Focus::Results => match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                Action::FocusNext
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => Action::CopySelected,
            KeyCode::Right | KeyCode::Char('l') => Action::SelectNextCard,
            KeyCode::Left | KeyCode::Char('h') => Action::SelectPrevCard,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectCardBelow,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectCardAbove,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
    }
}

/// Footer hints for the current context
pub fn hints(ctx: &KeyContext, loading: bool, has_results: bool) -> Vec<Shortcut> {
    if ctx.debug_console_open {
        return vec![
            Shortcut::new("j/k", "scroll"),
            Shortcut::new("a", "auto-scroll"),
            Shortcut::new("c", "clear"),
            Shortcut::new("Esc", "close console"),
        ];
    }

    match ctx.focus {
        Focus::Input => {
            let mut hints = vec![Shortcut {
                key_display: "Enter",
                description: "search",
                enabled: !loading,
            }];
            if has_results {
                hints.push(Shortcut::new("Tab", "results"));
            }
            hints.push(Shortcut::new("Ctrl+U", "clear"));
            hints.push(Shortcut::new("Ctrl+D", "logs"));
            hints.push(Shortcut::new("Esc", "quit"));
            hints
        }
        Focus::Results => vec![
            Shortcut::new("←↑↓→/hjkl", "move"),
            Shortcut::new("Enter/c", "copy"),
            Shortcut::new("Tab", "keyword"),
            Shortcut::new("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    const INPUT: KeyContext = KeyContext {
        focus: Focus::Input,
        debug_console_open: false,
    };

    const RESULTS: KeyContext = KeyContext {
        focus: Focus::Results,
        debug_console_open: false,
    };

    const CONSOLE: KeyContext = KeyContext {
        focus: Focus::Input,
        debug_console_open: true,
    };

    #[test]
    fn test_input_focus_edits_keyword() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &INPUT),
            Action::KeywordInput('g')
        );
        // Letters that are shortcuts elsewhere are plain text here
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &INPUT),
            Action::KeywordInput('q')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' ')), &INPUT),
            Action::KeywordInput(' ')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &INPUT),
            Action::KeywordBackspace
        );
        assert_eq!(handle_key_event(ctrl('u'), &INPUT), Action::KeywordClear);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &INPUT), Action::Submit);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &INPUT), Action::FocusNext);
    }

    #[test]
    fn test_results_focus_navigates_and_copies() {
        assert_eq!(
            handle_key_event(key(KeyCode::Right), &RESULTS),
            Action::SelectNextCard
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('h')), &RESULTS),
            Action::SelectPrevCard
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Down), &RESULTS),
            Action::SelectCardBelow
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('k')), &RESULTS),
            Action::SelectCardAbove
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &RESULTS),
            Action::CopySelected
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c')), &RESULTS),
            Action::CopySelected
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &RESULTS), Action::FocusNext);
    }

    #[test]
    fn test_global_keys() {
        for ctx in [INPUT, RESULTS, CONSOLE] {
            assert_eq!(handle_key_event(ctrl('c'), &ctx), Action::Quit);
            assert_eq!(handle_key_event(ctrl('d'), &ctx), Action::ToggleDebugConsole);
        }
        assert_eq!(handle_key_event(key(KeyCode::Esc), &INPUT), Action::Quit);
    }

    #[test]
    fn test_debug_console_captures_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &CONSOLE),
            Action::ScrollDebugConsoleDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c')), &CONSOLE),
            Action::ClearDebugLogs
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &CONSOLE),
            Action::ToggleDebugConsole
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &CONSOLE), Action::None);
    }

    #[test]
    fn test_search_hint_disabled_while_loading() {
        let idle = hints(&INPUT, false, false);
        assert!(idle[0].enabled);
        assert!(!idle.iter().any(|s| s.description == "results"));

        let loading = hints(&INPUT, true, false);
        assert_eq!(loading[0].key_display, "Enter");
        assert!(!loading[0].enabled);

        let with_results = hints(&INPUT, false, true);
        assert!(with_results.iter().any(|s| s.description == "results"));
    }
}
