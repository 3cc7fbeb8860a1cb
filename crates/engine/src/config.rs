//! Engine configuration from environment variables.
//!
//! `main` loads `.env.local` / `.env` first, so values there behave like
//! regular environment variables.

use crate::infrastructure::gemini::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_TIMEOUT_SECS,
};

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "chimera.db";

/// Where game records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite { path: String },
    /// Process-local; everything is lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub store: StoreBackend,
    /// `*`, a comma-separated origin list, or empty to disable CORS.
    pub cors_allowed_origins: String,
    pub persist_state_blocks: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_timeout_secs = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "GEMINI_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive whole number of seconds",
                    })
                }
            },
            None => DEFAULT_GEMINI_TIMEOUT_SECS,
        };

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "SERVER_PORT",
                value: raw,
                reason: "expected a port number",
            })?,
            None => DEFAULT_SERVER_PORT,
        };

        let store = match var("CHIMERA_STORE").as_deref().map(str::to_ascii_lowercase) {
            None => StoreBackend::Sqlite {
                path: var("CHIMERA_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            },
            Some(kind) if kind == "sqlite" => StoreBackend::Sqlite {
                path: var("CHIMERA_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            },
            Some(kind) if kind == "memory" => StoreBackend::Memory,
            Some(kind) => {
                return Err(ConfigError::Invalid {
                    var: "CHIMERA_STORE",
                    value: kind,
                    reason: "expected 'sqlite' or 'memory'",
                })
            }
        };

        let persist_state_blocks = match var("CHIMERA_PERSIST_STATE_BLOCKS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                var: "CHIMERA_PERSIST_STATE_BLOCKS",
                value: raw,
                reason: "expected true or false",
            })?,
            None => false,
        };

        Ok(Self {
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_timeout_secs,
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            store,
            // Unset means permissive; an explicitly empty value disables CORS.
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| "*".to_string()),
            persist_state_blocks,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults are valid");

        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini_timeout_secs, 120);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(
            config.store,
            StoreBackend::Sqlite {
                path: "chimera.db".to_string()
            }
        );
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(!config.persist_state_blocks);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("PORT", "8080"),
            ("CHIMERA_STORE", "Memory"),
            ("CORS_ALLOWED_ORIGINS", ""),
            ("CHIMERA_PERSIST_STATE_BLOCKS", "yes"),
        ])
        .expect("valid config");

        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.cors_allowed_origins, "");
        assert!(config.persist_state_blocks);
    }

    #[test]
    fn server_port_wins_over_port() {
        let config = config_from(&[("SERVER_PORT", "4000"), ("PORT", "5000")]).expect("valid");
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]).expect("valid");
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("SERVER_PORT", "http")]).is_err());
        assert!(config_from(&[("CHIMERA_STORE", "redis")]).is_err());
        assert!(config_from(&[("CHIMERA_PERSIST_STATE_BLOCKS", "maybe")]).is_err());
        assert!(config_from(&[("GEMINI_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config_from(&[("GEMINI_TIMEOUT_SECS", "0")]).expect_err("zero timeout");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "GEMINI_TIMEOUT_SECS",
                ..
            }
        ));
        let config = config_from(&[("GEMINI_TIMEOUT_SECS", "30")]).expect("valid");
        assert_eq!(config.gemini_timeout_secs, 30);
    }
}
