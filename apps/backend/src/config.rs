//! Service configuration from environment variables.

use steno_core::{AnalysisError, AnalysisSettings, EquivalenceConfig, TokenizePolicy};
use thiserror::Error;

/// Tokens allowed per side; the alignment table grows with the product of both sides.
pub const DEFAULT_MAX_TOKENS: usize = 2000;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be on/off, got {value:?}")]
    InvalidSwitch { key: &'static str, value: String },

    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key}: {source}")]
    Setting {
        key: &'static str,
        #[source]
        source: AnalysisError,
    },
}

/// Server address and engine defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub analysis: AnalysisSettings,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());

        let equivalence = EquivalenceConfig {
            enabled: parse_switch("STENO_EQUIVALENCE", lookup("STENO_EQUIVALENCE"))?,
            legacy_glyphs: parse_switch("STENO_LEGACY_GLYPHS", lookup("STENO_LEGACY_GLYPHS"))?,
        };

        let tokenize_policy = match lookup("STENO_TOKENIZE_POLICY") {
            Some(value) => value
                .trim()
                .parse::<TokenizePolicy>()
                .map_err(|source| ConfigError::Setting {
                    key: "STENO_TOKENIZE_POLICY",
                    source,
                })?,
            None => TokenizePolicy::default(),
        };

        let max_tokens = match lookup("STENO_MAX_TOKENS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::InvalidNumber {
                        key: "STENO_MAX_TOKENS",
                        value,
                    })
                }
                Ok(n) => n,
            },
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            host,
            port,
            analysis: AnalysisSettings {
                equivalence,
                tokenize_policy,
                max_tokens: Some(max_tokens),
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_switch(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch { key, value }),
    }
}
