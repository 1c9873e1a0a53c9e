use crate::config::ConfigError;
use snarkbridge_primitives::PrimitivesError;
use snarkbridge_prover::ProverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The verifier contract could not be reached, is unset, or has no code.
    #[error("Verifier unreachable: {0}")]
    TransportError(String),
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Prover error: {0}")]
    ProverError(#[from] ProverError),
    #[error("Primitives error: {0}")]
    PrimitivesError(#[from] PrimitivesError),
}

pub type Result<T> = core::result::Result<T, ClientError>;
