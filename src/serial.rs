//! Binary snapshot format for the console state.
//!
//! Every store mutation persists a full-state snapshot through this module.
//! The format is a 32-byte fixed header followed by a bincode-encoded payload:
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic bytes: b"RBRD"
//! 4       2     Format version (u16, little-endian)
//! 6       2     Engine version (u16, little-endian)
//! 8       4     Flags (u32, reserved)
//! 12      4     Payload length in bytes (u32, little-endian)
//! 16      16    BLAKE3 hash of the payload (truncated to 16 bytes)
//! 32..    var   Bincode-encoded payload
//! ```
//!
//! The format version must match exactly; a mismatch fails with
//! [`DeserializeError::IncompatibleVersion`]. The engine version is
//! informational only. The serialized shape is a parallel type hierarchy so
//! the wire format stays stable independently of the domain types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::State;
use crate::types::{Comparator, Rule, RuleAction, RuleSet, Threshold, Unit};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MAGIC: &[u8; 4] = b"RBRD";
const FORMAT_VERSION: u16 = 1;
const ENGINE_VERSION: u16 = 1;
const HEADER_SIZE: usize = 32;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when encoding a [`State`] snapshot to bytes.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("I/O error during serialization: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when decoding a [`State`] snapshot from bytes.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("not a ruleboard snapshot: invalid magic bytes")]
    BadMagic,

    #[error("incompatible format version: blob is v{blob}, engine supports v{supported}")]
    IncompatibleVersion { blob: u16, supported: u16 },

    #[error("integrity check failed: BLAKE3 checksum mismatch")]
    ChecksumMismatch,

    #[error("payload length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: u32, actual: usize },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("I/O error during deserialization: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Serialized type hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct SerializedState {
    rule_sets: Vec<SerializedRuleSet>,
    selected: Option<u32>,
    edit_mode: bool,
    staged_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRuleSet {
    id: u32,
    name: String,
    rules: Vec<SerializedRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRule {
    id: u32,
    measurement: String,
    comparator: SerializedComparator,
    compared_value: SerializedThreshold,
    unit: Option<SerializedUnit>,
    finding_name: String,
    action: SerializedAction,
    is_new: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SerializedComparator {
    Is,
    Gte,
    Lt,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SerializedThreshold {
    NotPresent,
    Number(f64),
    Blank,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SerializedUnit {
    Seconds,
    Millis,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SerializedAction {
    Normal,
    Reflux,
}

// ---------------------------------------------------------------------------
// Domain <-> wire conversion
// ---------------------------------------------------------------------------

fn serialize_rule(rule: &Rule) -> SerializedRule {
    SerializedRule {
        id: rule.id,
        measurement: rule.measurement.clone(),
        comparator: match rule.comparator {
            Comparator::Is => SerializedComparator::Is,
            Comparator::Gte => SerializedComparator::Gte,
            Comparator::Lt => SerializedComparator::Lt,
        },
        compared_value: match rule.compared_value {
            Threshold::NotPresent => SerializedThreshold::NotPresent,
            Threshold::Number(n) => SerializedThreshold::Number(n),
            Threshold::Blank => SerializedThreshold::Blank,
        },
        unit: rule.unit.map(|u| match u {
            Unit::Seconds => SerializedUnit::Seconds,
            Unit::Millis => SerializedUnit::Millis,
        }),
        finding_name: rule.finding_name.clone(),
        action: match rule.action {
            RuleAction::Normal => SerializedAction::Normal,
            RuleAction::Reflux => SerializedAction::Reflux,
        },
        is_new: rule.is_new,
    }
}

fn deserialize_rule(rule: SerializedRule) -> Rule {
    Rule {
        id: rule.id,
        measurement: rule.measurement,
        comparator: match rule.comparator {
            SerializedComparator::Is => Comparator::Is,
            SerializedComparator::Gte => Comparator::Gte,
            SerializedComparator::Lt => Comparator::Lt,
        },
        compared_value: match rule.compared_value {
            SerializedThreshold::NotPresent => Threshold::NotPresent,
            SerializedThreshold::Number(n) => Threshold::Number(n),
            SerializedThreshold::Blank => Threshold::Blank,
        },
        unit: rule.unit.map(|u| match u {
            SerializedUnit::Seconds => Unit::Seconds,
            SerializedUnit::Millis => Unit::Millis,
        }),
        finding_name: rule.finding_name,
        action: match rule.action {
            SerializedAction::Normal => RuleAction::Normal,
            SerializedAction::Reflux => RuleAction::Reflux,
        },
        is_new: rule.is_new,
    }
}

fn serialize_state(state: &State) -> SerializedState {
    SerializedState {
        rule_sets: state
            .rule_sets
            .iter()
            .map(|rs| SerializedRuleSet {
                id: rs.id,
                name: rs.name.clone(),
                rules: rs.rules.iter().map(serialize_rule).collect(),
            })
            .collect(),
        selected: state.selected,
        edit_mode: state.edit_mode,
        staged_name: state.staged_name.clone(),
    }
}

fn deserialize_state(state: SerializedState) -> State {
    State {
        rule_sets: state
            .rule_sets
            .into_iter()
            .map(|rs| RuleSet {
                id: rs.id,
                name: rs.name,
                rules: rs.rules.into_iter().map(deserialize_rule).collect(),
            })
            .collect(),
        selected: state.selected,
        edit_mode: state.edit_mode,
        staged_name: state.staged_name,
    }
}

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

/// Encode a state snapshot to the headered binary format.
///
/// # Errors
///
/// Returns [`SerializeError::Encode`] if bincode encoding fails.
pub fn encode_state(state: &State) -> Result<Vec<u8>, SerializeError> {
    let payload = bincode::serde::encode_to_vec(
        serialize_state(state),
        bincode::config::standard(),
    )?;

    let hash = blake3::hash(&payload);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&ENGINE_VERSION.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&u32::try_from(payload.len()).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&hash.as_bytes()[..16]);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode a state snapshot from the headered binary format.
///
/// # Errors
///
/// Returns a [`DeserializeError`] when the header is malformed, the format
/// version does not match, the checksum fails, or the payload cannot be
/// decoded.
pub fn decode_state(bytes: &[u8]) -> Result<State, DeserializeError> {
    if bytes.len() < HEADER_SIZE || &bytes[0..4] != MAGIC {
        return Err(DeserializeError::BadMagic);
    }

    let format_version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if format_version != FORMAT_VERSION {
        return Err(DeserializeError::IncompatibleVersion {
            blob: format_version,
            supported: FORMAT_VERSION,
        });
    }

    let payload_len = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_len as usize {
        return Err(DeserializeError::LengthMismatch {
            expected: payload_len,
            actual: payload.len(),
        });
    }

    let hash = blake3::hash(payload);
    if hash.as_bytes()[..16] != bytes[16..32] {
        return Err(DeserializeError::ChecksumMismatch);
    }

    let (serialized, _): (SerializedState, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())?;
    Ok(deserialize_state(serialized))
}
