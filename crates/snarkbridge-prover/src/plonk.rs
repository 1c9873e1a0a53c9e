use crate::adapter::{ProofOutput, ProofSystemAdapter};
use crate::error::Result;
use crate::proof::{signal_words, word_at};
use crate::snarkjs::SnarkjsProver;
use async_trait::async_trait;
use snarkbridge_primitives::alloy::primitives::{Bytes, U256};
use snarkbridge_primitives::{
    CalldataCodec, CalldataString, CircuitInputs, NumericNode, PlonkArguments, PlonkCodec,
    PrimitivesError, ProofSystem,
};
use std::path::Path;

/// G1 commitments in the order the verifier reads them.
pub const PROOF_POINTS: [&str; 9] = ["A", "B", "C", "Z", "T1", "T2", "T3", "Wxi", "Wxiw"];

/// Opening evaluations, appended after the commitments.
pub const PROOF_EVALUATIONS: [&str; 7] = [
    "eval_a", "eval_b", "eval_c", "eval_s1", "eval_s2", "eval_zw", "eval_r",
];

const WORD_BYTES: usize = 32;

pub const PROOF_BYTES: usize =
    PROOF_POINTS.len() * 2 * WORD_BYTES + PROOF_EVALUATIONS.len() * WORD_BYTES;

// set on the first byte of an uncompressed point at infinity
const INFINITY_FLAG: u8 = 0x40;

#[derive(Clone, Debug, Default)]
pub struct PlonkAdapter {
    prover: SnarkjsProver,
}

impl PlonkAdapter {
    pub fn new(prover: SnarkjsProver) -> Self {
        Self { prover }
    }

    /// Packs the proof into the verifier's flat byte layout: nine uncompressed
    /// G1 points (`x || y`, big-endian) followed by seven field elements.
    pub fn proof_bytes(proof: &NumericNode) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(PROOF_BYTES);
        for name in PROOF_POINTS {
            write_point(&mut buf, proof, name)?;
        }
        for name in PROOF_EVALUATIONS {
            buf.extend_from_slice(&word_at(proof, name, &[])?.to_be_bytes::<WORD_BYTES>());
        }
        Ok(Bytes::from(buf))
    }

    pub fn proof_arguments(
        proof: &NumericNode,
        public_signals: &[NumericNode],
    ) -> Result<PlonkArguments> {
        Ok(PlonkArguments {
            proof: Self::proof_bytes(proof)?,
            input: signal_words(public_signals)?,
        })
    }
}

/// Points come as projective `[x, y, z]`; only `z = 1` (affine) and `z = 0`
/// (infinity) are accepted.
fn write_point(buf: &mut Vec<u8>, proof: &NumericNode, name: &str) -> Result<()> {
    let z = match proof.get(name).and_then(|point| point.index(2)) {
        Some(_) => word_at(proof, name, &[2])?,
        None => U256::from(1u8),
    };

    if z.is_zero() {
        let start = buf.len();
        buf.resize(start + 2 * WORD_BYTES, 0);
        buf[start] |= INFINITY_FLAG;
        return Ok(());
    }
    if z != U256::from(1u8) {
        return Err(PrimitivesError::ProofFormatError(format!(
            "point {name} is not in affine form (z = {z})"
        ))
        .into());
    }

    buf.extend_from_slice(&word_at(proof, name, &[0])?.to_be_bytes::<WORD_BYTES>());
    buf.extend_from_slice(&word_at(proof, name, &[1])?.to_be_bytes::<WORD_BYTES>());
    Ok(())
}

#[async_trait]
impl ProofSystemAdapter for PlonkAdapter {
    fn proof_system(&self) -> ProofSystem {
        ProofSystem::Plonk
    }

    async fn full_prove(
        &self,
        inputs: &CircuitInputs,
        wasm: &Path,
        zkey: &Path,
    ) -> Result<ProofOutput> {
        self.prover
            .full_prove(ProofSystem::Plonk, inputs, wasm, zkey)
            .await
    }

    fn export_calldata(
        &self,
        proof: &NumericNode,
        public_signals: &[NumericNode],
    ) -> Result<CalldataString> {
        let args = Self::proof_arguments(proof, public_signals)?;
        tracing::debug!("plonk export: {} proof bytes", args.proof.len());
        Ok(CalldataString::new(ProofSystem::Plonk, PlonkCodec.encode(&args)))
    }
}
