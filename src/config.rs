use std::time::Duration;

use crate::prompt_engine::EngineError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
const MODEL_VAR: &str = "PROMPT_LAB_MODEL";
const API_BASE_VAR: &str = "PROMPT_LAB_API_BASE";
const TIMEOUT_VAR: &str = "PROMPT_LAB_TIMEOUT_SECS";

/// Runtime configuration. The API key's presence selects live vs simulated mode.
#[derive(Debug, Clone)]
pub struct LabConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LabConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS.into_iter().find_map(|name| non_empty(name));

        let timeout = match non_empty(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    EngineError::ConfigError(format!("Invalid {} '{}': {}", TIMEOUT_VAR, raw, e))
                })?;
                if secs == 0 {
                    return Err(EngineError::ConfigError(format!(
                        "{} must be at least 1",
                        TIMEOUT_VAR
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key_masked(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_api_key)
    }
}

/// Keep the first 6 and last 4 characters of keys longer than 10 characters
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 10 {
        return "******".to_string();
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}********{}", prefix, suffix)
}
