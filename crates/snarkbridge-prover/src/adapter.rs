use crate::error::Result;
use async_trait::async_trait;
use snarkbridge_primitives::{CalldataString, CircuitInputs, NumericNode, ProofSystem};
use std::path::Path;

/// Proof and public signals exactly as the prover emitted them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOutput {
    pub proof: NumericNode,
    pub public_signals: Vec<NumericNode>,
}

impl ProofOutput {
    pub fn normalized(&self) -> ProofOutput {
        ProofOutput {
            proof: self.proof.normalize(),
            public_signals: self.public_signals.iter().map(NumericNode::normalize).collect(),
        }
    }
}

/// Uniform access to one proof system of an external prover.
#[async_trait]
pub trait ProofSystemAdapter: Send + Sync {
    fn proof_system(&self) -> ProofSystem;

    /// Computes the witness from `inputs` and proves it with the given artifacts.
    async fn full_prove(
        &self,
        inputs: &CircuitInputs,
        wasm: &Path,
        zkey: &Path,
    ) -> Result<ProofOutput>;

    /// Formats a normalized proof and its public signals as Solidity calldata.
    fn export_calldata(
        &self,
        proof: &NumericNode,
        public_signals: &[NumericNode],
    ) -> Result<CalldataString>;
}
