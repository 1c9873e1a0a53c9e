use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{keccak256, Address, Bytes, U256};
use snarkbridge_primitives::{Groth16Arguments, PlonkArguments, VerifierArguments};

use crate::caller::{CallOutcome, ContractCaller};
use crate::error::{ClientError, Result};

pub const PLONK_VERIFY_SIGNATURE: &str = "verifyProof(bytes,uint256[])";

/// Solidity signature of the generated Groth16 verifier. The public input
/// array is fixed-size, so the selector depends on the input count.
pub fn groth16_verify_signature(inputs: usize) -> String {
    format!("verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[{inputs}])")
}

pub fn verify_signature(args: &VerifierArguments) -> String {
    match args {
        VerifierArguments::Groth16(args) => groth16_verify_signature(args.input.len()),
        VerifierArguments::Plonk(_) => PLONK_VERIFY_SIGNATURE.to_string(),
    }
}

/// ABI-encoded `verifyProof` call for the verifier matching `args`.
pub fn encode_verify_call(args: &VerifierArguments) -> Bytes {
    let params = match args {
        VerifierArguments::Groth16(args) => groth16_params(args),
        VerifierArguments::Plonk(args) => plonk_params(args),
    };
    let selector = keccak256(verify_signature(args).as_bytes());

    let mut data = selector[..4].to_vec();
    data.extend(params.abi_encode_params());
    Bytes::from(data)
}

fn uint(word: &U256) -> DynSolValue {
    DynSolValue::Uint(*word, 256)
}

fn fixed(words: &[U256]) -> DynSolValue {
    DynSolValue::FixedArray(words.iter().map(uint).collect())
}

fn groth16_params(args: &Groth16Arguments) -> DynSolValue {
    DynSolValue::Tuple(vec![
        fixed(&args.a),
        DynSolValue::FixedArray(args.b.iter().map(|row| fixed(row)).collect()),
        fixed(&args.c),
        fixed(&args.input),
    ])
}

fn plonk_params(args: &PlonkArguments) -> DynSolValue {
    DynSolValue::Tuple(vec![
        DynSolValue::Bytes(args.proof.to_vec()),
        DynSolValue::Array(args.input.iter().map(uint).collect()),
    ])
}

/// Asks a deployed verifier contract whether a proof is valid.
pub struct VerifierClient<C> {
    caller: C,
    verifier_address: Address,
}

impl<C: ContractCaller> VerifierClient<C> {
    pub fn new(caller: C, verifier_address: Address) -> Self {
        Self {
            caller,
            verifier_address,
        }
    }

    pub fn verifier_address(&self) -> Address {
        self.verifier_address
    }

    /// `Ok(false)` covers both a verifier returning false and one that
    /// reverts on malformed arguments. Only an unusable contract or
    /// connection is an error.
    pub async fn verify(&self, args: &VerifierArguments) -> Result<bool> {
        if self.verifier_address == Address::ZERO {
            return Err(ClientError::TransportError(
                "verifier address is not set".into(),
            ));
        }

        let calldata = encode_verify_call(args);
        tracing::debug!(
            "verifier: calling {} at {} with {} bytes",
            verify_signature(args),
            self.verifier_address,
            calldata.len()
        );

        match self.caller.call(self.verifier_address, calldata).await? {
            CallOutcome::Returned(data) => {
                let verified = decode_bool(&data, self.verifier_address)?;
                tracing::info!(
                    "verifier: {} proof verified = {}",
                    args.proof_system(),
                    verified
                );
                Ok(verified)
            }
            CallOutcome::Reverted(reason) => {
                tracing::warn!(
                    "verifier: {} call reverted, treating as rejected: {}",
                    args.proof_system(),
                    reason
                );
                Ok(false)
            }
        }
    }
}

fn decode_bool(data: &[u8], verifier: Address) -> Result<bool> {
    match DynSolType::Bool.abi_decode(data) {
        Ok(DynSolValue::Bool(verified)) => Ok(verified),
        _ => Err(ClientError::TransportError(format!(
            "unexpected return data from {verifier}: 0x{}; is a verifier deployed there?",
            alloy::primitives::hex::encode(data)
        ))),
    }
}
