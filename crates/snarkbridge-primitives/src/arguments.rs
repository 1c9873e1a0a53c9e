use crate::systems::ProofSystem;
use alloy::primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// Positional arguments of `verifyProof` on a Groth16 verifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groth16Arguments {
    pub a: [U256; 2],
    pub b: [[U256; 2]; 2],
    pub c: [U256; 2],
    pub input: Vec<U256>,
}

/// Positional arguments of `verifyProof` on a PLONK verifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkArguments {
    pub proof: Bytes,
    pub input: Vec<U256>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifierArguments {
    Groth16(Groth16Arguments),
    Plonk(PlonkArguments),
}

impl VerifierArguments {
    pub fn proof_system(&self) -> ProofSystem {
        match self {
            Self::Groth16(_) => ProofSystem::Groth16,
            Self::Plonk(_) => ProofSystem::Plonk,
        }
    }

    pub fn public_inputs(&self) -> &[U256] {
        match self {
            Self::Groth16(args) => &args.input,
            Self::Plonk(args) => &args.input,
        }
    }
}

impl From<Groth16Arguments> for VerifierArguments {
    fn from(args: Groth16Arguments) -> Self {
        Self::Groth16(args)
    }
}

impl From<PlonkArguments> for VerifierArguments {
    fn from(args: PlonkArguments) -> Self {
        Self::Plonk(args)
    }
}
