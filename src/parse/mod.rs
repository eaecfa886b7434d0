//! Parse phase: specification JSON → Rust types.

pub mod types;

pub use types::*;

use serde_json::Value;

use crate::error::SpecError;

/// Top-level fields every specification document must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["asset_type", "connections", "name", "nodes"];

/// Deserialize a specification JSON string into a `Specification`.
///
/// Reports every missing top-level field at once and stops there; nothing
/// downstream can be checked without them.
pub fn parse(json: &str) -> Result<Specification, Vec<SpecError>> {
    let value = serde_json::from_str::<Value>(json).map_err(|e| {
        vec![SpecError::parse(
            "P001",
            format!("Failed to parse graph spec JSON: {}", e),
        )]
    })?;
    parse_value(value)
}

/// Same as [`parse`] for an already-decoded JSON value.
pub fn parse_value(value: Value) -> Result<Specification, Vec<SpecError>> {
    let Some(object) = value.as_object() else {
        return Err(vec![SpecError::parse(
            "P001",
            "Graph spec must be a JSON object",
        )]);
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(vec![SpecError::parse(
            "P002",
            format!("Missing required top-level fields: {:?}", missing),
        )]);
    }

    serde_json::from_value::<Specification>(value).map_err(|e| {
        vec![SpecError::parse(
            "P001",
            format!("Failed to parse graph spec JSON: {}", e),
        )]
    })
}
