use std::sync::{Arc, Mutex};

use crate::{config::Config, theme::Theme};

/// Number of suggestion cards per row in the results grid
pub const RESULTS_COLUMNS: usize = 3;

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub search: SearchPanelState,
    pub task: TaskState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

/// UI-specific state (spinner, quit flag)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub spinner_frame: usize,
    pub should_quit: bool,
}

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
}

/// Keyword input plus the single authoritative search state
#[derive(Debug, Clone, Default)]
pub struct SearchPanelState {
    pub keyword: String,
    pub state: SearchState,
    /// Sequence number of the latest submitted search
    pub request_id: u64,
    pub focus: Focus,
    pub selected_card: usize,
    /// Last token handed out to a copy activation
    pub copy_token: u64,
}

/// The four states of a search. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    /// May be empty: the search ran and found nothing usable
    Success(Vec<SuggestionCard>),
    Error(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Cards of a successful search, empty in every other state
    pub fn cards(&self) -> &[SuggestionCard] {
        match self {
            SearchState::Success(cards) => cards,
            _ => &[],
        }
    }
}

/// One displayed suggestion with its own copy feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCard {
    pub username: String,
    pub copy: CopyState,
}

impl SuggestionCard {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            copy: CopyState::Idle,
        }
    }
}

/// Copy feedback of a single card.
///
/// `token` identifies the activation; only the reset timer carrying the same
/// token may flip the card back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    JustCopied {
        token: u64,
    },
}

/// Background task status state
#[derive(Debug, Clone, Default)]
pub struct TaskState {
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone)]
pub struct TaskStatus {
    pub message: String,
    pub status_type: TaskStatusType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatusType {
    Success,
    Error,
}

/// Debug console state (Quake-style drop-down console)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,   // Follow new logs as they arrive
    pub height_percent: u16, // Height as percentage of screen
    pub screen_height: u16,  // Last known terminal height
    pub logs: crate::log_capture::LogBuffer,
}

impl DebugConsoleState {
    /// Height of the console panel on a screen `screen_height` rows tall
    pub fn panel_height(&self, screen_height: u16) -> u16 {
        let height = u32::from(screen_height) * u32::from(self.height_percent) / 100;
        u16::try_from(height).unwrap_or(u16::MAX).min(screen_height)
    }

    /// Log lines that fit inside the panel borders
    pub fn visible_rows(&self) -> usize {
        self.panel_height(self.screen_height).saturating_sub(2) as usize
    }

    /// Offset at which the newest entries fill the panel
    pub fn tail_start(&self) -> usize {
        let total = self.logs.lock().map(|logs| logs.len()).unwrap_or(0);
        total.saturating_sub(self.visible_rows())
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            screen_height: 0,
            logs: Arc::new(Mutex::new(std::collections::VecDeque::new())),
        }
    }
}
