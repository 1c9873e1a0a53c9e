use super::{parse_word_list, render_word_list, strip_decorations, CalldataCodec};
use crate::arguments::PlonkArguments;
use crate::error::{PrimitivesError, Result};
use crate::systems::ProofSystem;
use alloy::primitives::Bytes;

/// Two-field grammar: `0x<proof-bytes>,["in0",...]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlonkCodec;

impl CalldataCodec for PlonkCodec {
    type Arguments = PlonkArguments;

    fn proof_system(&self) -> ProofSystem {
        ProofSystem::Plonk
    }

    fn decode(&self, text: &str) -> Result<PlonkArguments> {
        let fields = split_top_level(text)?;
        let [proof_field, input_field] = fields.as_slice() else {
            return Err(PrimitivesError::DecodeError(format!(
                "plonk calldata has {} top-level fields, expected 2",
                fields.len()
            )));
        };

        let proof_token = proof_field.trim();
        let digits = proof_token.strip_prefix("0x").ok_or_else(|| {
            PrimitivesError::DecodeError(format!("proof token is not 0x-prefixed: {proof_token}"))
        })?;
        if digits.is_empty() {
            return Err(PrimitivesError::DecodeError("proof token is empty".to_string()));
        }
        let proof = hex::decode(digits)
            .map_err(|e| PrimitivesError::DecodeError(format!("proof token is not hex: {e}")))?;

        let input = parse_word_list(&strip_decorations(input_field))?;

        Ok(PlonkArguments {
            proof: Bytes::from(proof),
            input,
        })
    }

    fn encode(&self, args: &PlonkArguments) -> String {
        format!("0x{},[{}]", hex::encode(&args.proof), render_word_list(&args.input))
    }
}

/// Splits on the commas that sit outside any bracket.
fn split_top_level(text: &str) -> Result<Vec<&str>> {
    let mut fields = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    PrimitivesError::DecodeError("unbalanced ']' in plonk calldata".to_string())
                })?
            }
            ',' if depth == 0 => {
                fields.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(PrimitivesError::DecodeError(
            "unbalanced '[' in plonk calldata".to_string(),
        ));
    }
    fields.push(&text[start..]);
    Ok(fields)
}
