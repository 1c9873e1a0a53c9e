use crate::adapter::{ProofOutput, ProofSystemAdapter};
use crate::error::Result;
use crate::proof::{signal_words, word_at};
use crate::snarkjs::SnarkjsProver;
use async_trait::async_trait;
use snarkbridge_primitives::{
    CalldataCodec, CalldataString, CircuitInputs, Groth16Arguments, Groth16Codec, NumericNode,
    ProofSystem,
};
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct Groth16Adapter {
    prover: SnarkjsProver,
}

impl Groth16Adapter {
    pub fn new(prover: SnarkjsProver) -> Self {
        Self { prover }
    }

    /// Reads `pi_a`, `pi_b`, `pi_c` into verifier order. Each `pi_b` row is an
    /// Fq2 element stored `[c0, c1]`; the verifier expects `[c1, c0]`.
    pub fn proof_arguments(
        proof: &NumericNode,
        public_signals: &[NumericNode],
    ) -> Result<Groth16Arguments> {
        Ok(Groth16Arguments {
            a: [word_at(proof, "pi_a", &[0])?, word_at(proof, "pi_a", &[1])?],
            b: [
                [word_at(proof, "pi_b", &[0, 1])?, word_at(proof, "pi_b", &[0, 0])?],
                [word_at(proof, "pi_b", &[1, 1])?, word_at(proof, "pi_b", &[1, 0])?],
            ],
            c: [word_at(proof, "pi_c", &[0])?, word_at(proof, "pi_c", &[1])?],
            input: signal_words(public_signals)?,
        })
    }
}

#[async_trait]
impl ProofSystemAdapter for Groth16Adapter {
    fn proof_system(&self) -> ProofSystem {
        ProofSystem::Groth16
    }

    async fn full_prove(
        &self,
        inputs: &CircuitInputs,
        wasm: &Path,
        zkey: &Path,
    ) -> Result<ProofOutput> {
        self.prover
            .full_prove(ProofSystem::Groth16, inputs, wasm, zkey)
            .await
    }

    fn export_calldata(
        &self,
        proof: &NumericNode,
        public_signals: &[NumericNode],
    ) -> Result<CalldataString> {
        let args = Self::proof_arguments(proof, public_signals)?;
        Ok(CalldataString::new(
            ProofSystem::Groth16,
            Groth16Codec.encode(&args),
        ))
    }
}
