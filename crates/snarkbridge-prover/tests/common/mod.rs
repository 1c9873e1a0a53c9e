#![allow(dead_code)]

use serde_json::{json, Map, Value};
use snarkbridge_primitives::{CircuitInputs, NumericNode};
use snarkbridge_prover::ProverCommand;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stand-in for `snarkjs <system> fullprove input wasm zkey proof public`.
/// Emits a canned proof and a single public signal equal to the product of
/// all inputs, like a multiplier circuit. A zero input fails the constraints.
const FAKE_SNARKJS: &str = r#"
set -e
system="$1"; command="$2"; input="$3"; proof="$6"; public="$7"
if [ "$command" != "fullprove" ]; then
  echo "unknown command: $command" >&2
  exit 2
fi
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

pub const PLONK_POINTS: [&str; 9] = ["A", "B", "C", "Z", "T1", "T2", "T3", "Wxi", "Wxiw"];
pub const PLONK_EVALUATIONS: [&str; 7] = [
    "eval_a", "eval_b", "eval_c", "eval_s1", "eval_s2", "eval_zw", "eval_r",
];

pub fn groth16_proof() -> Value {
    json!({
        "pi_a": [
            "11195616374532094834575813394880637364262397384476318574950823466530617788562",
            "7436520612227232370545698880431347474386961017022925413416282412432003716587",
            "1"
        ],
        "pi_b": [
            [
                "4252856637066155298962584433658640011466302618287536282128045468025493463427",
                "17616493520393493123218489609209470016186436011327612658713427932232339519090"
            ],
            [
                "1404431290498430627063325185233012347929462637924016830312424463218012384014",
                "20186497016919640366208817024429427924024307768961474434011426106802498612233"
            ],
            ["1", "0"]
        ],
        "pi_c": [
            "5962453582934521566716232893099123813484419447004575123012232618489123817452",
            "13711264417312432474431416203941049012283516127430145339621097432418426105006",
            "1"
        ],
        "protocol": "groth16",
        "curve": "bn128"
    })
}

pub fn plonk_proof() -> Value {
    let mut proof = Map::new();
    for (i, name) in PLONK_POINTS.iter().enumerate() {
        proof.insert(
            name.to_string(),
            json!([(1000 + 2 * i).to_string(), (1001 + 2 * i).to_string(), "1"]),
        );
    }
    for (i, name) in PLONK_EVALUATIONS.iter().enumerate() {
        proof.insert(name.to_string(), json!((5000 + i).to_string()));
    }
    proof.insert("protocol".into(), json!("plonk"));
    proof.insert("curve".into(), json!("bn128"));
    Value::Object(proof)
}

/// A scratch directory holding the fake prover, its fixtures and dummy artifacts.
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

        // run through `sh` so the script never has to be executable
        let script = dir.path().join("snarkjs.sh");
        fs::write(
            &script,
            format!("fixtures='{}'\n{}", fixtures.display(), FAKE_SNARKJS),
        )
        .unwrap();

        let wasm = dir.path().join("Multiplier3.wasm");
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
