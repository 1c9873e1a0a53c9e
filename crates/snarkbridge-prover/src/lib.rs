//! Proof-system adapters over an external snarkjs-compatible prover.
//!
//! Each adapter proves circuit inputs with a wasm witness generator and a
//! zkey proving key, and exports the resulting proof as Solidity calldata.

pub mod adapter;
pub mod error;
pub mod groth16;
pub mod plonk;
mod proof;
pub mod snarkjs;

pub use adapter::{ProofOutput, ProofSystemAdapter};
pub use error::{ProverError, Result};
pub use groth16::Groth16Adapter;
pub use plonk::PlonkAdapter;
pub use snarkjs::{ProverCommand, SnarkjsProver};
