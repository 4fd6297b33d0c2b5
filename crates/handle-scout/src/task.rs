//! Background task system for handling remote calls and timers without blocking UI
use handle_scout_ai::{GeminiClient, SuggestionProvider};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Results from background task execution
/// These are sent back to the main loop and converted to Actions
#[derive(Debug, PartialEq)]
pub enum TaskResult {
    /// Suggestions for a search (request_id, usernames or user-facing error)
    SuggestionsLoaded(u64, Result<Vec<String>, String>),

    /// Copy feedback timer elapsed (card index, activation token)
    CopyFeedbackExpired(usize, u64),
}

/// Background tasks that can be executed asynchronously
#[derive(Debug)]
pub enum BackgroundTask<P = GeminiClient> {
    FetchSuggestions {
        request_id: u64,
        keyword: String,
        provider: Arc<P>,
    },
    ExpireCopyFeedback {
        index: usize,
        token: u64,
    },
    /// Generic delayed task wrapper - delays execution of any task
    DelayedTask {
        task: Box<BackgroundTask<P>>,
        delay_ms: u64,
    },
}

/// Background task worker that processes tasks without blocking UI
///
/// Every task runs on its own tokio task so a pending timer never holds
/// back a search.
pub fn start_task_worker<P>(
    mut task_rx: mpsc::UnboundedReceiver<BackgroundTask<P>>,
    result_tx: mpsc::UnboundedSender<TaskResult>,
) -> tokio::task::JoinHandle<()>
where
    P: SuggestionProvider + 'static,
{
    tokio::spawn(async move {
        while let Some(task) = task_rx.recv().await {
            let result_tx = result_tx.clone();
            tokio::spawn(async move {
                process_task(task, &result_tx).await;
            });
        }
    })
}

async fn process_task<P: SuggestionProvider>(
    mut task: BackgroundTask<P>,
    result_tx: &mpsc::UnboundedSender<TaskResult>,
) {
    // Sleep through any delay wrappers, then run the wrapped task
    while let BackgroundTask::DelayedTask {
        task: inner,
        delay_ms,
    } = task
    {
        tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        debug!("Delayed task triggered after {}ms", delay_ms);
        task = *inner;
    }

    match task {
        BackgroundTask::FetchSuggestions {
            request_id,
            keyword,
            provider,
        } => {
            let result = provider
                .find_available_usernames(&keyword)
                .await
                .map_err(|err| {
                    error!("Search #{} for '{}' failed", request_id, keyword);
                    err.message().to_string()
                });
            let _ = result_tx.send(TaskResult::SuggestionsLoaded(request_id, result));
        }
        BackgroundTask::ExpireCopyFeedback { index, token } => {
            let _ = result_tx.send(TaskResult::CopyFeedbackExpired(index, token));
        }
        BackgroundTask::DelayedTask { .. } => {
            // Unwrapped above
        }
    }
}
