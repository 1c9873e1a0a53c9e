use snarkbridge_primitives::PrimitivesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProverError {
    /// Missing or corrupt artifacts, or inputs that do not satisfy the circuit.
    #[error("Proving failed: {0}")]
    ProvingError(String),
    /// The prover program could not be reached at all.
    #[error("Prover unreachable: {0}")]
    TransportError(String),
    #[error("Primitives error: {0}")]
    PrimitivesError(#[from] PrimitivesError),
}

pub type Result<T> = core::result::Result<T, ProverError>;
