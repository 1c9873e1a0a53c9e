#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use snarkbridge_client::{encode_verify_call, CallOutcome, ContractCaller, Result};
use snarkbridge_primitives::alloy::dyn_abi::DynSolValue;
use snarkbridge_primitives::alloy::primitives::{address, Address, Bytes};
use snarkbridge_primitives::{CircuitInputs, NumericNode, ProofSystem, VerifierArguments};
use snarkbridge_prover::{Groth16Adapter, PlonkAdapter, ProverCommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

pub const VERIFIER: Address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");

/// Stand-in for `snarkjs <system> fullprove input wasm zkey proof public`
/// whose only public signal is the product of the inputs.
const FAKE_SNARKJS: &str = r#"
set -e
system="$1"; input="$3"; proof="$6"; public="$7"
product=1
for value in $(tr -c '0-9' ' ' < "$input"); do
  product=$((product * value))
done
if [ "$product" -eq 0 ]; then
  echo "Error: Assert Failed." >&2
  exit 1
fi
cp "$fixtures/${system}_proof.json" "$proof"
printf '["%s"]' "$product" > "$public"
"#;

pub fn groth16_proof() -> Value {
    json!({
        "pi_a": ["0x1b4f", "0x2c31", "1"],
        "pi_b": [["0x0a", "0x0b"], ["0x0c", "0x0d"], ["1", "0"]],
        "pi_c": ["0x3e", "0x3f", "1"],
        "protocol": "groth16",
        "curve": "bn128"
    })
}

pub fn plonk_proof() -> Value {
    let mut proof = json!({ "protocol": "plonk", "curve": "bn128" });
    for (i, name) in ["A", "B", "C", "Z", "T1", "T2", "T3", "Wxi", "Wxiw"]
        .iter()
        .enumerate()
    {
        proof[*name] = json!([(10 + i).to_string(), (20 + i).to_string(), "1"]);
    }
    for (i, name) in ["eval_a", "eval_b", "eval_c", "eval_s1", "eval_s2", "eval_zw", "eval_r"]
        .iter()
        .enumerate()
    {
        proof[*name] = json!(format!("0x{:x}", 300 + i));
    }
    proof
}

/// Arguments an honest export of the canned proof must produce.
pub fn expected_arguments(system: ProofSystem, public_signal: &str) -> VerifierArguments {
    let signals = [NumericNode::from(public_signal).normalize()];
    match system {
        ProofSystem::Groth16 => {
            let proof = NumericNode::from(groth16_proof()).normalize();
            Groth16Adapter::proof_arguments(&proof, &signals).unwrap().into()
        }
        ProofSystem::Plonk => {
            let proof = NumericNode::from(plonk_proof()).normalize();
            PlonkAdapter::proof_arguments(&proof, &signals).unwrap().into()
        }
    }
}

pub struct FakeProver {
    pub dir: TempDir,
    pub command: ProverCommand,
    pub wasm: PathBuf,
    pub zkey: PathBuf,
}

impl FakeProver {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = dir.path().join("fixtures");
        fs::create_dir_all(&fixtures).unwrap();
        fs::write(fixtures.join("groth16_proof.json"), groth16_proof().to_string()).unwrap();
        fs::write(fixtures.join("plonk_proof.json"), plonk_proof().to_string()).unwrap();

        let script = dir.path().join("snarkjs.sh");
        fs::write(
            &script,
            format!("fixtures='{}'\n{}", fixtures.display(), FAKE_SNARKJS),
        )
        .unwrap();

        let wasm = dir.path().join("circuit.wasm");
        let zkey = dir.path().join("circuit_final.zkey");
        fs::write(&wasm, b"\0asm").unwrap();
        fs::write(&zkey, b"zkey").unwrap();

        Self {
            command: ProverCommand {
                program: PathBuf::from("/bin/sh"),
                args: vec![script.display().to_string()],
            },
            dir,
            wasm,
            zkey,
        }
    }
}

pub fn inputs(values: &[(&str, &str)]) -> CircuitInputs {
    values
        .iter()
        .map(|(name, value)| (name.to_string(), NumericNode::from(*value)))
        .collect()
}

/// In-memory verifier that accepts exactly one argument set and returns
/// false for anything else.
pub struct AcceptingVerifier {
    accepted: Bytes,
    pub calls: Mutex<Vec<Bytes>>,
}

impl AcceptingVerifier {
    pub fn new(accepted: &VerifierArguments) -> Self {
        Self {
            accepted: encode_verify_call(accepted),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContractCaller for AcceptingVerifier {
    async fn call(&self, to: Address, data: Bytes) -> Result<CallOutcome> {
        assert_eq!(to, VERIFIER);
        let verified = data == self.accepted;
        self.calls.lock().unwrap().push(data);
        Ok(CallOutcome::Returned(Bytes::from(
            DynSolValue::Bool(verified).abi_encode(),
        )))
    }
}
