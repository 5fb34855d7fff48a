use std::{
    env,
    net::{AddrParseError, SocketAddr},
};
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_ROUNDS: u64 = 10_000_000;

const LISTEN_ADDR_VAR: &str = "GATEWAY_LISTEN_ADDR";
const MAX_ROUNDS_VAR: &str = "GATEWAY_MAX_ROUNDS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Largest round count a single request may ask for
    pub max_rounds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid GATEWAY_LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid GATEWAY_MAX_ROUNDS {value:?}: expected a positive integer")]
    InvalidMaxRounds { value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = parse_listen_addr(
            lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        )?;
        let max_rounds = match lookup(MAX_ROUNDS_VAR) {
            Some(value) => parse_max_rounds(value)?,
            None => DEFAULT_MAX_ROUNDS,
        };

        Ok(Self {
            listen_addr,
            max_rounds,
        })
    }
}

fn parse_listen_addr(value: String) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidListenAddr { value, source })
}

fn parse_max_rounds(value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaxRounds { value }),
    }
}
