//! LLM configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const PLACEHOLDER_API_KEY: &str = "your-openrouter-api-key-here";
pub const DEFAULT_LLM_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 300;
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: String,
    pub url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// All optional:
    /// - `OPENROUTER_API_KEY`: bearer token; placeholder when absent
    /// - `OPENROUTER_URL`: full chat-completions URL
    /// - `LLM_MODEL`: default `meta-llama/llama-3.1-8b-instruct:free`
    /// - `LLM_MAX_TOKENS`: default 300
    /// - `LLM_TEMPERATURE`: default 0.7
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 10
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if a numeric value is malformed.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed LLM config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if a numeric value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let api_key = lookup("OPENROUTER_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
        let url = lookup("OPENROUTER_URL").unwrap_or_else(|| DEFAULT_OPENROUTER_URL.to_string());
        let model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());
        let max_tokens = parse_or(&lookup, "LLM_MAX_TOKENS", DEFAULT_LLM_MAX_TOKENS)?;
        let temperature = parse_or(&lookup, "LLM_TEMPERATURE", DEFAULT_LLM_TEMPERATURE)?;
        let timeouts = LlmTimeouts {
            request_secs: parse_or(&lookup, "LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_or(&lookup, "LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { api_key, url, model, max_tokens, temperature, timeouts })
    }

    /// `true` when a real key was supplied rather than the placeholder.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, LlmError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| LlmError::ConfigParse(format!("invalid {key}: {raw:?}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
