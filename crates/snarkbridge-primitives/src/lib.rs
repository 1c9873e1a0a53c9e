//! Core types shared by the snarkbridge crates.
//!
//! Re-exports the alloy types used in public signatures so downstream crates
//! stay on the same alloy version.

pub mod alloy {
    pub mod primitives {
        pub use alloy::primitives::{address, bytes, keccak256, Address, Bytes, FixedBytes, U256};
    }

    pub mod dyn_abi {
        pub use alloy::dyn_abi::{DynSolType, DynSolValue};
    }
}

pub mod arguments;
pub mod calldata;
pub mod error;
pub mod numeric;
pub mod systems;

pub use arguments::{Groth16Arguments, PlonkArguments, VerifierArguments};
pub use calldata::{CalldataCodec, CalldataString, Groth16Codec, PlonkCodec};
pub use error::{PrimitivesError, Result};
pub use numeric::{normalize, CircuitInputs, NumericNode};
pub use systems::ProofSystem;
