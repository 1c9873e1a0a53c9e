//! Calldata codecs.
//!
//! A prover's Solidity export emits one text blob per proof. Its grammar
//! depends on the proof system, so every blob travels as a [`CalldataString`]
//! tagged with the system that produced it and is decoded by the matching
//! codec.

use crate::arguments::VerifierArguments;
use crate::error::{PrimitivesError, Result};
use crate::numeric::{parse_numeric_literal, to_u256};
use crate::systems::ProofSystem;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod groth16;
pub mod plonk;

pub use groth16::Groth16Codec;
pub use plonk::PlonkCodec;

pub trait CalldataCodec {
    type Arguments;

    fn proof_system(&self) -> ProofSystem;

    /// Parses exported calldata into positional verifier arguments.
    fn decode(&self, text: &str) -> Result<Self::Arguments>;

    /// Renders arguments in the same grammar the prover export uses.
    fn encode(&self, args: &Self::Arguments) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalldataString {
    pub system: ProofSystem,
    pub text: String,
}

impl CalldataString {
    pub fn new(system: ProofSystem, text: impl Into<String>) -> Self {
        Self {
            system,
            text: text.into(),
        }
    }

    pub fn decode(&self) -> Result<VerifierArguments> {
        match self.system {
            ProofSystem::Groth16 => Groth16Codec.decode(&self.text).map(VerifierArguments::from),
            ProofSystem::Plonk => PlonkCodec.decode(&self.text).map(VerifierArguments::from),
        }
    }
}

impl fmt::Display for CalldataString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Brackets, quotes and whitespace carry no information in either grammar.
fn is_decoration(c: char) -> bool {
    matches!(c, '"' | '[' | ']') || c.is_whitespace()
}

fn strip_decorations(text: &str) -> String {
    text.chars().filter(|c| !is_decoration(*c)).collect()
}

/// Splits stripped text into integer words. Empty text yields no words.
fn parse_word_list(stripped: &str) -> Result<Vec<U256>> {
    if stripped.is_empty() {
        return Ok(Vec::new());
    }
    stripped.split(',').map(parse_word).collect()
}

fn parse_word(token: &str) -> Result<U256> {
    if token.is_empty() {
        return Err(PrimitivesError::DecodeError("empty token".to_string()));
    }
    let integer = parse_numeric_literal(token)
        .ok_or_else(|| PrimitivesError::DecodeError(format!("not an integer literal: {token}")))?;
    to_u256(&integer)
        .ok_or_else(|| PrimitivesError::DecodeError(format!("value exceeds 256 bits: {token}")))
}

/// `"0x" + 64 hex digits`, quoted, the way the export pads every word.
fn render_word(word: &U256) -> String {
    format!("\"0x{}\"", hex::encode(word.to_be_bytes::<32>()))
}

fn render_word_list(words: &[U256]) -> String {
    words.iter().map(render_word).collect::<Vec<_>>().join(",")
}
