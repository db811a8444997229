use std::net::SocketAddr;

use pokeduel_battle::TypeNameMatching;
use thiserror::Error;

pub const BIND_ENV: &str = "POKEDUEL_BIND";
pub const MATCHING_ENV: &str = "POKEDUEL_MATCHING";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?} in POKEDUEL_BIND: {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid POKEDUEL_MATCHING {0:?} (expected legacy or case-insensitive)")]
    InvalidMatching(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub matching: TypeNameMatching,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 7878)),
            matching: TypeNameMatching::Legacy,
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEDUEL_BIND` - Listen address (default: 127.0.0.1:7878)
    /// - `POKEDUEL_MATCHING` - `legacy` or `case-insensitive` (default: legacy)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ENV) {
            config.bind_addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
        }

        if let Some(value) = lookup(MATCHING_ENV) {
            config.matching = TypeNameMatching::from_name(&value)
                .ok_or(ConfigError::InvalidMatching(value))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 7878);
        assert_eq!(config.matching, TypeNameMatching::Legacy);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ENV, "0.0.0.0:9000"),
            (MATCHING_ENV, "case-insensitive"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.matching, TypeNameMatching::CaseInsensitive);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ENV, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));

        let err = ServerConfig::from_lookup(lookup(&[(MATCHING_ENV, "loose")])).unwrap_err();
        assert!(err.to_string().contains("loose"));
    }
}
