//! Server configuration read from environment variables.
//!
//! - `SITEEDIT_HOST`: listen address (default: "0.0.0.0")
//! - `SITEEDIT_PORT`: listen port (default: "8000")
//! - `SITEEDIT_LLM_PROVIDER`: `gemini`, `openrouter` or `openai_compatible`.
//!   Unset selects the offline keyword interpreter.
//! - `SITEEDIT_LLM_MODEL`, `SITEEDIT_LLM_BASE_URL`, `SITEEDIT_LLM_SYSTEM_PROMPT`
//! - `SITEEDIT_LLM_API_KEY`, falling back to `GOOGLE_API_KEY`
//! - `SITEEDIT_LLM_TIMEOUT_SECS`: provider request timeout (default: "30")

use std::time::Duration;

use thiserror::Error;

pub const SUPPORTED_PROVIDERS: [&str; 3] = ["gemini", "openrouter", "openai_compatible"];

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("unsupported provider '{0}': use gemini, openrouter or openai_compatible")]
    UnsupportedProvider(String),

    #[error("{key} is required for provider '{provider}'")]
    MissingValue {
        key: &'static str,
        provider: &'static str,
    },
}

/// Model-provider settings for the LLM interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub system_prompt: Option<String>,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            provider: None,
            model: None,
            api_base_url: None,
            api_key: None,
            system_prompt: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    /// True when a provider and API key are both present.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some() && self.api_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub llm: LlmConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("SITEEDIT_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SITEEDIT_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("SITEEDIT_LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "SITEEDIT_LLM_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let provider = get("SITEEDIT_LLM_PROVIDER").map(|p| p.to_ascii_lowercase());
        if let Some(p) = provider.as_deref() {
            if !SUPPORTED_PROVIDERS.contains(&p) {
                return Err(ConfigError::UnsupportedProvider(p.to_string()));
            }
        }

        let api_base_url = get("SITEEDIT_LLM_BASE_URL");
        if provider.as_deref() == Some("openai_compatible") && api_base_url.is_none() {
            return Err(ConfigError::MissingValue {
                key: "SITEEDIT_LLM_BASE_URL",
                provider: "openai_compatible",
            });
        }

        let llm = LlmConfig {
            provider,
            model: get("SITEEDIT_LLM_MODEL"),
            api_base_url,
            api_key: get("SITEEDIT_LLM_API_KEY").or_else(|| get("GOOGLE_API_KEY")),
            system_prompt: get("SITEEDIT_LLM_SYSTEM_PROMPT"),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(ServerConfig {
            host: get("SITEEDIT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            llm,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(!config.llm.is_configured());
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
    }

    #[test]
    fn google_api_key_is_a_fallback() {
        let config = config_from(&[
            ("SITEEDIT_LLM_PROVIDER", "Gemini"),
            ("GOOGLE_API_KEY", "g-key"),
        ])
        .unwrap();
        assert_eq!(config.llm.provider.as_deref(), Some("gemini"));
        assert_eq!(config.llm.api_key.as_deref(), Some("g-key"));
        assert!(config.llm.is_configured());

        let config = config_from(&[
            ("SITEEDIT_LLM_API_KEY", "primary"),
            ("GOOGLE_API_KEY", "g-key"),
        ])
        .unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = config_from(&[("SITEEDIT_PORT", " "), ("SITEEDIT_LLM_PROVIDER", "")]).unwrap();
        assert_eq!(config.port, 8000);
        assert!(config.llm.provider.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("SITEEDIT_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SITEEDIT_PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(config_from(&[("SITEEDIT_LLM_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = config_from(&[("SITEEDIT_LLM_PROVIDER", "anthropic")]).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedProvider("anthropic".to_string()));
    }

    #[test]
    fn rejects_openai_compatible_without_base_url() {
        let err = config_from(&[
            ("SITEEDIT_LLM_PROVIDER", "openai_compatible"),
            ("SITEEDIT_LLM_API_KEY", "k"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingValue {
                key: "SITEEDIT_LLM_BASE_URL",
                provider: "openai_compatible",
            }
        );

        let config = config_from(&[
            ("SITEEDIT_LLM_PROVIDER", "openai_compatible"),
            ("SITEEDIT_LLM_API_KEY", "k"),
            ("SITEEDIT_LLM_BASE_URL", "http://localhost:11434/v1"),
        ])
        .unwrap();
        assert!(config.llm.is_configured());
    }
}
