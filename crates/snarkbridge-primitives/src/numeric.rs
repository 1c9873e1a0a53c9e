//! Numeric canonicalization of prover output.
//!
//! Provers hand back proofs and public signals as JSON in which every field
//! element is a string. [`NumericNode`] models that data as a closed tree and
//! [`normalize`] turns every numeric-looking string into an arbitrary-precision
//! integer, leaving everything else untouched.

use alloy::primitives::U256;
use num_bigint::{BigInt, Sign};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Opaque scalars that normalization never touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericNode {
    Integer(BigInt),
    Text(String),
    Sequence(Vec<NumericNode>),
    Mapping(BTreeMap<String, NumericNode>),
    Scalar(Scalar),
    Null,
}

/// Circuit inputs keyed by signal name.
pub type CircuitInputs = BTreeMap<String, NumericNode>;

/// Returns a copy of `value` where every `^[0-9]+$` or `^0x[0-9a-fA-F]+$`
/// string has been replaced by the integer it spells.
///
/// Sequences keep their order and length, mappings keep their exact key set.
/// Anything else passes through unchanged, so normalizing twice yields the
/// same tree as normalizing once.
pub fn normalize(value: &NumericNode) -> NumericNode {
    match value {
        NumericNode::Text(text) => match parse_numeric_literal(text) {
            Some(integer) => NumericNode::Integer(integer),
            None => NumericNode::Text(text.clone()),
        },
        NumericNode::Sequence(items) => NumericNode::Sequence(items.iter().map(normalize).collect()),
        NumericNode::Mapping(entries) => NumericNode::Mapping(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), normalize(item)))
                .collect(),
        ),
        NumericNode::Integer(_) | NumericNode::Scalar(_) | NumericNode::Null => value.clone(),
    }
}

/// Parses a pure decimal literal or a `0x`-prefixed hex literal.
pub fn parse_numeric_literal(text: &str) -> Option<BigInt> {
    if is_decimal_literal(text) {
        return BigInt::parse_bytes(text.as_bytes(), 10);
    }
    match text.strip_prefix("0x") {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            BigInt::parse_bytes(digits.as_bytes(), 16)
        }
        _ => None,
    }
}

fn is_decimal_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Narrows an integer to a 256-bit word, `None` if negative or too wide.
pub fn to_u256(value: &BigInt) -> Option<U256> {
    let (sign, bytes) = value.to_bytes_be();
    if sign == Sign::Minus || bytes.len() > 32 {
        return None;
    }
    U256::try_from_be_slice(&bytes)
}

impl NumericNode {
    pub fn normalize(&self) -> NumericNode {
        normalize(self)
    }

    pub fn get(&self, key: &str) -> Option<&NumericNode> {
        match self {
            NumericNode::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn index(&self, index: usize) -> Option<&NumericNode> {
        self.as_sequence().and_then(|items| items.get(index))
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            NumericNode::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[NumericNode]> {
        match self {
            NumericNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NumericNode::Null)
    }
}

impl From<Value> for NumericNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => NumericNode::Null,
            Value::Bool(b) => NumericNode::Scalar(Scalar::Bool(b)),
            Value::Number(n) => NumericNode::Scalar(Scalar::Number(n)),
            Value::String(s) => NumericNode::Text(s),
            Value::Array(items) => NumericNode::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                NumericNode::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<BigInt> for NumericNode {
    fn from(value: BigInt) -> Self {
        NumericNode::Integer(value)
    }
}

impl From<&str> for NumericNode {
    fn from(value: &str) -> Self {
        NumericNode::Text(value.to_string())
    }
}

// Integers are written as decimal strings, which is what provers expect in input files.
impl Serialize for NumericNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumericNode::Integer(integer) => serializer.serialize_str(&integer.to_string()),
            NumericNode::Text(text) => serializer.serialize_str(text),
            NumericNode::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            NumericNode::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
            NumericNode::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            NumericNode::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            NumericNode::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for NumericNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(NumericNode::from)
    }
}
