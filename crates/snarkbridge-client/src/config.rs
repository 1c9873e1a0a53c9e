//! Runner configuration.

use alloy::primitives::Address;
use serde::Deserialize;
use snarkbridge_primitives::{CircuitInputs, ProofSystem};
use snarkbridge_prover::ProverCommand;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    pub rpc_url: String,
    pub log_level: String,
    #[serde(default)]
    pub prover: ProverCommand,
    pub jobs: Vec<JobConfig>,
}

/// One circuit proved with one proof system and checked by one verifier.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub system: ProofSystem,
    pub wasm: PathBuf,
    pub zkey: PathBuf,
    pub verifier: Address,
    pub inputs: CircuitInputs,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("Failed to parse URL: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("Failed to parse log level: {0}")]
    LogLevelParseError(String),
}

impl RunnerConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: RunnerConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc_url).map_err(ConfigError::from)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevelParseError(self.log_level.clone()))
    }
}
