//! Handle Scout AI
//!
//! Asks the Gemini `generateContent` API for short social-media usernames
//! built around a keyword, then re-validates what comes back locally.
//!
//! # Example
//!
//! ```no_run
//! use handle_scout_ai::{GeminiClient, ProviderConfig, SuggestionProvider};
//!
//! # async fn run() -> Result<(), handle_scout_ai::GenerationError> {
//! let client = GeminiClient::new(ProviderConfig::with_api_key("my-key"));
//! let usernames = client.find_available_usernames("game").await?;
//! for name in &usernames {
//!     println!("@{name}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod parse;
mod prompt;
mod provider;
mod rules;
pub mod wire;

pub use error::{GENERATION_FAILED_MESSAGE, GenerationError};
pub use parse::parse_usernames;
pub use prompt::{DEFAULT_SUGGESTION_COUNT, build_prompt};
pub use provider::{
    DEFAULT_API_BASE_URL, DEFAULT_MODEL, GeminiClient, ProviderConfig, SuggestionProvider,
};
pub use rules::UsernameRules;
pub use wire::{GenerateContentRequest, GenerateContentResponse};
