use anyhow::Result;
use handle_scout_ai::GeminiClient;
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyEventKind},
    },
    prelude::*,
    widgets::*,
};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use ::log::debug;

use crate::actions::Action;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::effect::execute_effect;
use crate::shortcuts::KeyContext;
use crate::state::*;
use crate::store::Store;
use crate::task::{BackgroundTask, TaskResult, start_task_worker};
use crate::theme::Theme;
use crate::view_models::results::ResultsViewModel;

mod actions;
mod clipboard;
mod config;
mod effect;
mod log_capture;
mod reducer;
mod shortcuts;
mod state;
mod store;
mod task;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Communication channels
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub task_tx: mpsc::UnboundedSender<BackgroundTask>,
    // Suggestion provider (created after .env is loaded)
    pub provider: Option<Arc<GeminiClient>>,
    pub clipboard: Box<dyn ClipboardSink>,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

async fn update(app: &mut App, msg: Action) -> Result<()> {
    // Pure Redux/Elm architecture: Dispatch action to reducers, get effects back
    let effects = app.store.dispatch(msg);

    // Execute effects returned by reducers and dispatch follow-up actions
    for effect in effects {
        let follow_up_actions = execute_effect(app, effect).await?;

        for action in follow_up_actions {
            let nested_effects = app.store.dispatch(action);
            for nested_effect in nested_effects {
                let nested_actions = execute_effect(app, nested_effect).await?;
                // Anything deeper goes back through the channel
                for nested_action in nested_actions {
                    let _ = app.action_tx.send(nested_action);
                }
            }
        }
    }

    Ok(())
}

fn start_event_handler(
    tx: mpsc::UnboundedSender<Action>,
    key_context: Arc<Mutex<KeyContext>>,
) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let action = match crossterm::event::poll(tick_rate) {
                Ok(true) => {
                    let ctx = key_context.lock().map(|ctx| *ctx).unwrap_or_default();
                    handle_events(&ctx).unwrap_or(Action::None)
                }
                Ok(false) => Action::None,
                Err(err) => {
                    debug!("Event polling failed: {}", err);
                    Action::None
                }
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

fn handle_events(ctx: &KeyContext) -> Result<Action> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            shortcuts::handle_key_event(key, ctx)
        }
        Event::Resize(_, rows) => Action::TerminalResized(rows),
        _ => Action::None,
    })
}

/// Convert TaskResult to Action - the single place where task results become actions
fn result_to_action(result: TaskResult) -> Action {
    match result {
        TaskResult::SuggestionsLoaded(request_id, result) => {
            Action::SuggestionsLoaded { request_id, result }
        }
        TaskResult::CopyFeedbackExpired(index, token) => {
            Action::CopyFeedbackExpired { index, token }
        }
    }
}

fn key_context(state: &AppState) -> KeyContext {
    KeyContext {
        focus: state.search.focus,
        debug_console_open: state.debug_console.is_open,
    }
}

async fn run_with_log_buffer(log_buffer: log_capture::LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();

    let mut app = App::new(
        action_tx.clone(),
        task_tx,
        log_buffer,
        Config::load(),
        Box::new(SystemClipboard::default()),
    );

    // Shared with the event handler so keys map according to focus
    let key_context_shared = Arc::new(Mutex::new(KeyContext::default()));
    let event_task = start_event_handler(app.action_tx.clone(), key_context_shared.clone());
    let worker_task = start_task_worker(task_rx, result_tx);

    app.action_tx.send(Action::Bootstrap)?;
    app.action_tx.send(Action::TerminalResized(t.size()?.height))?;

    loop {
        if let Ok(mut ctx) = key_context_shared.lock() {
            *ctx = key_context(app.store.state());
        }

        t.draw(|f| ui(f, &app))?;

        // Prioritize results over actions so responses land before the next keystroke
        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            tokio::select! {
                biased;
                Some(result) = result_rx.recv() => Some(result_to_action(result)),
                Some(action) = action_rx.recv() => Some(action),
                else => None
            }
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => {
                if let Err(err) = update(&mut app, action).await {
                    debug!("Error updating app: {}", err);
                    break;
                }
            }
            Ok(None) => break, // Channel closed
            Err(_) => {
                // Timeout - tick spinner animation
                let _ = app.action_tx.send(Action::TickSpinner);
            }
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    event_task.abort();
    worker_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(3), // Keyword input
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled("Handle Scout", theme.title())),
        Line::from(Span::styled(
            "Find your perfect username with AI",
            Style::default().fg(theme.text_secondary),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    views::search_bar::render_search_bar(f, chunks[1], &state.search, theme);

    let results = ResultsViewModel::from_state(&state.search, state.ui.spinner_frame);
    views::results::render_results(f, chunks[2], &results, theme);

    let hints = shortcuts::hints(
        &key_context(state),
        state.search.state.is_loading(),
        !state.search.state.cards().is_empty(),
    );
    views::status_bar::render_status_bar(f, chunks[3], &hints, state.task.status.as_ref(), theme);

    // Render debug console (Quake-style drop-down) if visible
    if state.debug_console.is_open {
        views::debug_console::render_debug_console(f, f.area(), &state.debug_console, theme);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger();

    initialize_panic_handler();
    startup()?;
    let result = run_with_log_buffer(log_buffer).await;
    shutdown()?;
    result
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        task_tx: mpsc::UnboundedSender<BackgroundTask>,
        log_buffer: log_capture::LogBuffer,
        config: Config,
        clipboard: Box<dyn ClipboardSink>,
    ) -> App {
        let initial_state = AppState {
            ui: UiState::default(),
            search: SearchPanelState::default(),
            task: TaskState::default(),
            debug_console: DebugConsoleState {
                logs: log_buffer,
                ..DebugConsoleState::default()
            },
            config,
            theme: Theme::default(),
        };

        App {
            store: Store::new(initial_state),
            action_tx,
            task_tx,
            provider: None, // Initialized during bootstrap after .env is loaded
            clipboard,
        }
    }
}
