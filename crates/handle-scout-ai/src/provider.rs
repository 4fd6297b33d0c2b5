//! Gemini client producing username suggestions.

use crate::{
    error::GenerationError,
    parse::parse_usernames,
    prompt::{DEFAULT_SUGGESTION_COUNT, build_prompt},
    rules::UsernameRules,
    wire::{GenerateContentRequest, GenerateContentResponse},
};
use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Anything that can turn a keyword into validated username candidates.
///
/// One invocation performs at most one remote call. No caching, no retries.
pub trait SuggestionProvider: Send + Sync {
    fn find_available_usernames(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<String>, GenerationError>> + Send;
}

/// Immutable settings injected into [`GeminiClient`] at construction.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// May be empty; the remote side then rejects the call.
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub suggestion_count: usize,
    pub request_timeout: Duration,
    pub rules: UsernameRules,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.8,
            top_p: 0.9,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            request_timeout: Duration::from_secs(30),
            rules: UsernameRules::default(),
        }
    }
}

impl ProviderConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

fn summarize_response_body(body: &str) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Perform the remote call and return the raw model text.
    async fn generate(&self, prompt: String) -> Result<String, GenerationError> {
        let request = GenerateContentRequest::usernames(
            prompt,
            self.config.temperature,
            self.config.top_p,
        );

        log::debug!(
            "Sending username generation request to {} (model {})",
            self.config.api_base_url,
            self.config.model
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::status(
                status.as_u16(),
                summarize_response_body(&body),
            ));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(envelope.text())
    }
}

impl SuggestionProvider for GeminiClient {
    async fn find_available_usernames(
        &self,
        keyword: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = build_prompt(keyword, self.config.suggestion_count);

        let text = match self.generate(prompt).await {
            Ok(text) => text,
            Err(err) => {
                match std::error::Error::source(&err) {
                    Some(cause) => log::error!("Error generating usernames with Gemini: {}", cause),
                    None => log::error!("Error generating usernames with Gemini"),
                }
                return Err(err);
            }
        };

        let candidates = parse_usernames(&text);
        let received = candidates.len();
        let usernames = self.config.rules.filter(candidates);

        log::debug!(
            "Gemini returned {} candidates, {} passed validation",
            received,
            usernames.len()
        );

        Ok(usernames)
    }
}
