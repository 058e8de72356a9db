//! Process configuration, read once from the environment at startup.

use dlp_contract::prelude::{Address, B256};
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default scanner batch size
pub const DEFAULT_BATCH_SIZE: u64 = 50;

/// Default delay between scanner batches in milliseconds
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

/// Default delay after each confirmed transaction in milliseconds
pub const DEFAULT_TX_DELAY_MS: u64 = 1000;

/// Default reward log location
pub const DEFAULT_LOG_PATH: &str = "output/rewarding.log";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rewarder configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: String,
    pub private_key: B256,
    pub registry_address: Address,
    pub pool_address: Address,
    pub chain_id: Option<u64>,
    pub start_file_id: u64,
    pub end_file_id: u64,
    pub batch_size: u64,
    pub batch_delay: Duration,
    pub tx_delay: Duration,
    pub proof_index: u64,
    pub log_path: PathBuf,
}

impl Config {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through a key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let batch_size = env.parse_or("BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::Invalid {
                key: "BATCH_SIZE",
                value: batch_size.to_string(),
                reason: "must be greater than zero".into(),
            });
        }

        Ok(Self {
            rpc_url: env.required("RPC_URL")?,
            private_key: env.parse("ADMIN_WALLET_PRIVATE_KEY")?,
            registry_address: env.parse("REGISTRATION_CONTRACT_ADDRESS")?,
            pool_address: env.parse("DLP_CONTRACT_ADDRESS")?,
            chain_id: env.parse_optional("CHAIN_ID")?,
            start_file_id: env.parse("START_FILE_ID")?,
            end_file_id: env.parse("END_FILE_ID")?,
            batch_size,
            batch_delay: Duration::from_millis(
                env.parse_or("DELAY_BETWEEN_BATCHES", DEFAULT_BATCH_DELAY_MS)?,
            ),
            tx_delay: Duration::from_millis(
                env.parse_or("DELAY_BETWEEN_TRANSACTIONS", DEFAULT_TX_DELAY_MS)?,
            ),
            proof_index: env.parse("PROOF_INDEX")?,
            log_path: env
                .optional("REWARD_LOG_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_LOG_PATH), PathBuf::from),
        })
    }
}

// The private key never reaches the logs
impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("registry_address", &self.registry_address)
            .field("pool_address", &self.pool_address)
            .field("chain_id", &self.chain_id)
            .field("start_file_id", &self.start_file_id)
            .field("end_file_id", &self.end_file_id)
            .field("batch_size", &self.batch_size)
            .field("batch_delay", &self.batch_delay)
            .field("tx_delay", &self.tx_delay)
            .field("proof_index", &self.proof_index)
            .field("log_path", &self.log_path)
            .finish()
    }
}

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &'static str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }

    fn parse_optional<T>(&self, key: &'static str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key)
            .map(|value| {
                value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                    key,
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()
    }

    fn parse<T>(&self, key: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse_optional(key)?.ok_or(ConfigError::Missing(key))
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.parse_optional(key)?.unwrap_or(default))
    }
}
