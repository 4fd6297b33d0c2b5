/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User-initiated actions
    Bootstrap,
    KeywordInput(char),
    KeywordBackspace,
    KeywordClear,
    Submit,
    FocusNext,
    SelectNextCard,
    SelectPrevCard,
    SelectCardBelow,
    SelectCardAbove,
    CopySelected,
    CopyCard(usize),

    // Background task completion notifications
    SuggestionsLoaded {
        request_id: u64,
        result: Result<Vec<String>, String>,
    },
    CopyFeedbackExpired {
        index: usize,
        token: u64,
    },
    ClipboardResult(Result<String, String>), // Ok(username) or Err(reason)

    TickSpinner, // Increment spinner animation frame
    TerminalResized(u16), // New terminal height in rows

    // Debug console (Quake-style drop-down)
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    Quit,
    None,
}
