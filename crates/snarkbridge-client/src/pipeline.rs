use num_bigint::BigInt;
use snarkbridge_primitives::{CircuitInputs, PrimitivesError, ProofSystem, VerifierArguments};
use snarkbridge_prover::{Groth16Adapter, PlonkAdapter, ProofSystemAdapter, SnarkjsProver};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::caller::ContractCaller;
use crate::error::Result;
use crate::verifier::VerifierClient;

/// Adapter for `system` backed by `prover`.
pub fn adapter_for(system: ProofSystem, prover: SnarkjsProver) -> Arc<dyn ProofSystemAdapter> {
    match system {
        ProofSystem::Groth16 => Arc::new(Groth16Adapter::new(prover)),
        ProofSystem::Plonk => Arc::new(PlonkAdapter::new(prover)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineReport {
    pub system: ProofSystem,
    pub public_signals: Vec<BigInt>,
    pub arguments: VerifierArguments,
    pub verified: bool,
}

/// Prove, normalize, export calldata, decode it and ask the verifier.
pub struct ProofPipeline<C> {
    adapter: Arc<dyn ProofSystemAdapter>,
    verifier: VerifierClient<C>,
}

impl<C: ContractCaller> ProofPipeline<C> {
    pub fn new(adapter: Arc<dyn ProofSystemAdapter>, verifier: VerifierClient<C>) -> Self {
        Self { adapter, verifier }
    }

    pub async fn run(
        &self,
        inputs: &CircuitInputs,
        wasm: &Path,
        zkey: &Path,
    ) -> Result<PipelineReport> {
        let system = self.adapter.proof_system();
        let start = Instant::now();

        let output = self
            .adapter
            .full_prove(inputs, wasm, zkey)
            .await?
            .normalized();

        let public_signals = output
            .public_signals
            .iter()
            .enumerate()
            .map(|(i, signal)| {
                signal.as_integer().cloned().ok_or_else(|| {
                    PrimitivesError::ProofFormatError(format!(
                        "public signal {i} is not an integer"
                    ))
                })
            })
            .collect::<core::result::Result<Vec<_>, _>>()?;

        let calldata = self
            .adapter
            .export_calldata(&output.proof, &output.public_signals)?;
        tracing::debug!("pipeline: {} calldata {}", system, calldata);

        let arguments = calldata.decode()?;
        let verified = self.verifier.verify(&arguments).await?;

        tracing::info!(
            "pipeline: {} run finished in {:?}, verified = {}",
            system,
            start.elapsed(),
            verified
        );

        Ok(PipelineReport {
            system,
            public_signals,
            arguments,
            verified,
        })
    }
}
