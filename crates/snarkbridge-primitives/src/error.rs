use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitivesError {
    /// Calldata text does not match the grammar of its proof system.
    #[error("Calldata decode error: {0}")]
    DecodeError(String),
    /// A proof or public-signal tree is missing a field or holds a non-integer value.
    #[error("Proof format error: {0}")]
    ProofFormatError(String),
    #[error("Invalid proof system: {0}")]
    InvalidProofSystem(String),
}

pub type Result<T> = core::result::Result<T, PrimitivesError>;
