//! Effect system for Redux architecture
//! Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
//! The update() function executes these effects
use ::log::{debug, warn};

use crate::{
    App,
    actions::Action,
    config::{API_KEY_VARS, api_key_from_env},
    task::BackgroundTask,
};
use anyhow::Result;
use handle_scout_ai::{GENERATION_FAILED_MESSAGE, GeminiClient};
use std::sync::Arc;

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load .env file if no API key is set in the environment
    LoadEnvFile,

    /// Build the suggestion provider (must happen after LoadEnvFile)
    InitializeProvider,

    /// Trigger background suggestion request
    FetchSuggestions { request_id: u64, keyword: String },

    /// Write text to the system clipboard
    CopyToClipboard { text: String },

    /// Revert a card's copy feedback after a delay
    ScheduleCopyReset {
        index: usize,
        token: u64,
        delay_ms: u64,
    },
}

/// Execute an effect and return follow-up actions to dispatch
/// This maintains clean architecture by avoiding direct action dispatching from effects
pub async fn execute_effect(app: &mut App, effect: Effect) -> Result<Vec<Action>> {
    let mut follow_up_actions = Vec::new();

    match effect {
        Effect::LoadEnvFile => {
            if api_key_from_env().is_none() {
                match dotenvy::dotenv() {
                    Ok(path) => {
                        debug!("Loaded .env file from: {:?}", path);
                    }
                    Err(_) => {
                        // Not an error, the key may still be missing which
                        // only surfaces when a search is made
                        debug!(".env file not found, will rely on environment variables");
                    }
                }
            }
        }

        Effect::InitializeProvider => {
            let api_key = api_key_from_env().unwrap_or_else(|| {
                warn!(
                    "No API key found in {}; searches will fail until one is set",
                    API_KEY_VARS.join(" or ")
                );
                String::new()
            });
            let provider_config = app.store.state().config.provider_config(api_key);
            debug!(
                "Suggestion provider initialized (model {}, timeout {:?})",
                provider_config.model, provider_config.request_timeout
            );
            app.provider = Some(Arc::new(GeminiClient::new(provider_config)));
        }

        Effect::FetchSuggestions {
            request_id,
            keyword,
        } => match app.provider.clone() {
            Some(provider) => {
                let _ = app.task_tx.send(BackgroundTask::FetchSuggestions {
                    request_id,
                    keyword,
                    provider,
                });
            }
            None => {
                warn!("Search #{} requested before provider initialization", request_id);
                follow_up_actions.push(Action::SuggestionsLoaded {
                    request_id,
                    result: Err(GENERATION_FAILED_MESSAGE.to_string()),
                });
            }
        },

        Effect::CopyToClipboard { text } => match app.clipboard.set_text(&text) {
            Ok(()) => {
                debug!("Copied '{}' to clipboard", text);
                follow_up_actions.push(Action::ClipboardResult(Ok(text)));
            }
            Err(err) => {
                warn!("Failed to copy '{}' to clipboard: {:#}", text, err);
                follow_up_actions.push(Action::ClipboardResult(Err(err.to_string())));
            }
        },

        Effect::ScheduleCopyReset {
            index,
            token,
            delay_ms,
        } => {
            let _ = app.task_tx.send(BackgroundTask::DelayedTask {
                task: Box::new(BackgroundTask::ExpireCopyFeedback { index, token }),
                delay_ms,
            });
        }
    }

    Ok(follow_up_actions)
}
