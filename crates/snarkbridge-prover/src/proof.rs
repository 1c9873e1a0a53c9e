//! Lookups into normalized proof trees.

use snarkbridge_primitives::alloy::primitives::U256;
use snarkbridge_primitives::numeric::to_u256;
use snarkbridge_primitives::{NumericNode, PrimitivesError, Result};

/// Walks `proof[name][path[0]][path[1]]...` and returns the 256-bit word there.
pub(crate) fn word_at(proof: &NumericNode, name: &str, path: &[usize]) -> Result<U256> {
    let mut node = proof
        .get(name)
        .ok_or_else(|| PrimitivesError::ProofFormatError(format!("proof has no field `{name}`")))?;
    for &index in path {
        node = node.index(index).ok_or_else(|| {
            PrimitivesError::ProofFormatError(format!("`{name}` has no element at {path:?}"))
        })?;
    }
    word(node, &format!("{name}{path:?}"))
}

pub(crate) fn word(node: &NumericNode, what: &str) -> Result<U256> {
    let integer = node.as_integer().ok_or_else(|| {
        PrimitivesError::ProofFormatError(format!("{what} is not an integer: {node:?}"))
    })?;
    to_u256(integer)
        .ok_or_else(|| PrimitivesError::ProofFormatError(format!("{what} does not fit in 256 bits")))
}

pub(crate) fn signal_words(public_signals: &[NumericNode]) -> Result<Vec<U256>> {
    public_signals
        .iter()
        .enumerate()
        .map(|(i, signal)| word(signal, &format!("public signal {i}")))
        .collect()
}
