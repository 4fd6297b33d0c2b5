use handle_scout_ai::{DEFAULT_API_BASE_URL, DEFAULT_MODEL, ProviderConfig, UsernameRules};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};

/// Environment variables checked, in order, for the Gemini API key
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Application configuration loaded from handle-scout.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Also reject names with characters other than letters, digits and `_`
    #[serde(default)]
    pub strict_charset: bool,
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_suggestion_count() -> usize {
    20
}

fn default_temperature() -> f32 {
    0.8
}

fn default_top_p() -> f32 {
    0.9
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            suggestion_count: default_suggestion_count(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            request_timeout_secs: default_request_timeout_secs(),
            strict_charset: false,
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "handle-scout.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::debug!("Loaded config from {}", CONFIG_FILE);
                    return config;
                }
                Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e),
            }
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                match toml::from_str(&content) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", home_config.display());
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring invalid {}: {}", home_config.display(), e),
                }
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    /// Provider settings for the given API key
    pub fn provider_config(&self, api_key: String) -> ProviderConfig {
        ProviderConfig {
            api_key,
            api_base_url: self.api_base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            suggestion_count: self.suggestion_count,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            rules: UsernameRules {
                strict_charset: self.strict_charset,
                ..UsernameRules::default()
            },
        }
    }
}

/// First non-empty API key found in the environment
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}
