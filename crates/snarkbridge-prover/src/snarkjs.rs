//! Runs the external snarkjs-compatible prover as a child process.

use crate::adapter::ProofOutput;
use crate::error::{ProverError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snarkbridge_primitives::{CircuitInputs, ProofSystem};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::process::Command;

/// How to launch the prover, e.g. `snarkjs` or `npx` with `["snarkjs"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverCommand {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ProverCommand {
    fn default() -> Self {
        Self {
            program: PathBuf::from("snarkjs"),
            args: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SnarkjsProver {
    command: ProverCommand,
}

impl SnarkjsProver {
    pub fn new(command: ProverCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &ProverCommand {
        &self.command
    }

    /// `<program> [args] <system> fullprove input.json <wasm> <zkey> proof.json public.json`,
    /// run in a scratch directory that is dropped on return.
    pub async fn full_prove(
        &self,
        system: ProofSystem,
        inputs: &CircuitInputs,
        wasm: &Path,
        zkey: &Path,
    ) -> Result<ProofOutput> {
        // the prover runs in the scratch dir, so relative paths are resolved first
        let wasm = resolve_artifact(wasm, "circuit wasm").await?;
        let zkey = resolve_artifact(zkey, "proving key").await?;

        let scratch = tempfile::tempdir()
            .map_err(|e| ProverError::ProvingError(format!("failed to create scratch dir: {e}")))?;
        let input_path = scratch.path().join("input.json");
        let proof_path = scratch.path().join("proof.json");
        let public_path = scratch.path().join("public.json");

        let input_json = serde_json::to_vec(inputs)
            .map_err(|e| ProverError::ProvingError(format!("failed to encode inputs: {e}")))?;
        tokio::fs::write(&input_path, input_json)
            .await
            .map_err(|e| ProverError::ProvingError(format!("failed to write inputs: {e}")))?;

        tracing::info!(
            "prover: {} fullprove wasm={} zkey={} inputs={}",
            system,
            wasm.display(),
            zkey.display(),
            inputs.len()
        );
        let started = Instant::now();

        let output = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(system.as_str())
            .arg("fullprove")
            .arg(&input_path)
            .arg(&wasm)
            .arg(&zkey)
            .arg(&proof_path)
            .arg(&public_path)
            .current_dir(scratch.path())
            .output()
            .await
            .map_err(|e| {
                ProverError::TransportError(format!(
                    "failed to launch {}: {e}",
                    self.command.program.display()
                ))
            })?;

        if !output.status.success() {
            return Err(ProverError::ProvingError(format!(
                "{} fullprove exited with {}: {}",
                system,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let proof = read_json(&proof_path).await?;
        let public_signals = match read_json(&public_path).await? {
            Value::Array(signals) => signals,
            other => {
                return Err(ProverError::ProvingError(format!(
                    "public signals are not an array: {other}"
                )))
            }
        };

        tracing::info!(
            "prover: {} proof generated in {:.2}s with {} public signals",
            system,
            started.elapsed().as_secs_f64(),
            public_signals.len()
        );

        Ok(ProofOutput {
            proof: proof.into(),
            public_signals: public_signals.into_iter().map(Into::into).collect(),
        })
    }
}

async fn resolve_artifact(path: &Path, what: &str) -> Result<PathBuf> {
    let not_found = |e: std::io::Error| {
        ProverError::ProvingError(format!("{what} not found: {}: {e}", path.display()))
    };
    let resolved = tokio::fs::canonicalize(path).await.map_err(not_found)?;
    let metadata = tokio::fs::metadata(&resolved).await.map_err(not_found)?;
    if !metadata.is_file() {
        return Err(ProverError::ProvingError(format!(
            "{what} is not a file: {}",
            path.display()
        )));
    }
    Ok(resolved)
}

async fn read_json(path: &Path) -> Result<Value> {
    let data = tokio::fs::read(path).await.map_err(|e| {
        ProverError::ProvingError(format!("prover produced no {}: {e}", path.display()))
    })?;
    serde_json::from_slice(&data).map_err(|e| {
        ProverError::ProvingError(format!("prover wrote invalid json to {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snarkbridge_primitives::NumericNode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn inputs() -> CircuitInputs {
        [
            ("a".to_string(), NumericNode::from("1")),
            ("b".to_string(), NumericNode::from("2")),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn missing_artifacts_fail_before_spawning() {
        let prover = SnarkjsProver::new(ProverCommand {
            program: PathBuf::from("/nonexistent/snarkjs"),
            args: vec![],
        });
        let result = prover
            .full_prove(
                ProofSystem::Groth16,
                &inputs(),
                Path::new("/nonexistent/circuit.wasm"),
                Path::new("/nonexistent/circuit_final.zkey"),
            )
            .await;
        assert!(matches!(result, Err(ProverError::ProvingError(msg)) if msg.contains("circuit wasm")));
    }

    #[tokio::test]
    async fn unreachable_prover_is_a_transport_error() {
        let mut wasm = NamedTempFile::new().unwrap();
        let mut zkey = NamedTempFile::new().unwrap();
        wasm.write_all(b"\0asm").unwrap();
        zkey.write_all(b"zkey").unwrap();

        let prover = SnarkjsProver::new(ProverCommand {
            program: PathBuf::from("/nonexistent/snarkjs"),
            args: vec![],
        });
        let result = prover
            .full_prove(ProofSystem::Plonk, &inputs(), wasm.path(), zkey.path())
            .await;
        assert!(matches!(result, Err(ProverError::TransportError(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_in_scratch_dir_with_resolved_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let wasm = dir.path().join("circuit.wasm");
        let zkey = dir.path().join("circuit_final.zkey");
        std::fs::write(&wasm, b"\0asm").unwrap();
        std::fs::write(&zkey, b"zkey").unwrap();

        // same file, spelled relative to the test's working directory
        let cwd = std::env::current_dir().unwrap();
        let mut relative_wasm = PathBuf::new();
        for _ in cwd.components().skip(1) {
            relative_wasm.push("..");
        }
        relative_wasm.push(wasm.strip_prefix("/").unwrap());

        // reports its own working directory, the input file's directory and the wasm argument
        let script = r#"printf '{"cwd":"%s","scratch":"%s","wasm":"%s"}' "$(pwd -P)" "$(cd "$(dirname "$3")" && pwd -P)" "$4" > "$6"; printf '[]' > "$7""#;
        let prover = SnarkjsProver::new(ProverCommand {
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".to_string(), script.to_string(), "snarkjs".to_string()],
        });

        let output = prover
            .full_prove(ProofSystem::Groth16, &inputs(), &relative_wasm, &zkey)
            .await
            .unwrap();

        let field = |name: &str| match output.proof.get(name) {
            Some(NumericNode::Text(text)) => text.clone(),
            other => panic!("missing {name}: {other:?}"),
        };
        assert_eq!(field("cwd"), field("scratch"));
        assert!(Path::new(&field("wasm")).is_absolute());
        assert!(output.public_signals.is_empty());
    }

    #[tokio::test]
    async fn directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let zkey = NamedTempFile::new().unwrap();
        let prover = SnarkjsProver::default();

        let result = prover
            .full_prove(ProofSystem::Groth16, &inputs(), dir.path(), zkey.path())
            .await;
        assert!(matches!(result, Err(ProverError::ProvingError(msg)) if msg.contains("circuit wasm")));
    }

    #[test]
    fn default_command_is_snarkjs() {
        let command: ProverCommand = serde_json::from_str(r#"{"program": "snarkjs"}"#).unwrap();
        assert_eq!(command, ProverCommand::default());
    }
}
