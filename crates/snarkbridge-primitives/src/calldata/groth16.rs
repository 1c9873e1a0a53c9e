use super::{parse_word_list, render_word, render_word_list, strip_decorations, CalldataCodec};
use crate::arguments::Groth16Arguments;
use crate::error::{PrimitivesError, Result};
use crate::systems::ProofSystem;

/// Number of proof words ahead of the public inputs: a (2), b (2x2), c (2).
pub const GROTH16_PROOF_WORDS: usize = 8;

/// Flat-array grammar:
/// `["a0", "a1"],[["b00", "b01"],["b10", "b11"]],["c0", "c1"],["in0",...]`
#[derive(Clone, Copy, Debug, Default)]
pub struct Groth16Codec;

impl CalldataCodec for Groth16Codec {
    type Arguments = Groth16Arguments;

    fn proof_system(&self) -> ProofSystem {
        ProofSystem::Groth16
    }

    fn decode(&self, text: &str) -> Result<Groth16Arguments> {
        let words = parse_word_list(&strip_decorations(text))?;
        if words.len() < GROTH16_PROOF_WORDS {
            return Err(PrimitivesError::DecodeError(format!(
                "groth16 calldata holds {} values, expected at least {}",
                words.len(),
                GROTH16_PROOF_WORDS
            )));
        }

        Ok(Groth16Arguments {
            a: [words[0], words[1]],
            b: [[words[2], words[3]], [words[4], words[5]]],
            c: [words[6], words[7]],
            input: words[GROTH16_PROOF_WORDS..].to_vec(),
        })
    }

    fn encode(&self, args: &Groth16Arguments) -> String {
        format!(
            "[{}, {}],[[{}, {}],[{}, {}]],[{}, {}],[{}]",
            render_word(&args.a[0]),
            render_word(&args.a[1]),
            render_word(&args.b[0][0]),
            render_word(&args.b[0][1]),
            render_word(&args.b[1][0]),
            render_word(&args.b[1][1]),
            render_word(&args.c[0]),
            render_word(&args.c[1]),
            render_word_list(&args.input),
        )
    }
}
