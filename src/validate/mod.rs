//! Validation phase: check a specification against a catalogue.
//!
//! Every problem becomes a `SpecError` and checking carries on, so a caller
//! sees all problems in one pass. An empty result means the specification is
//! safe to compile.

pub mod completeness;
pub mod connections;
pub mod pins;
pub mod structural;

use crate::catalogue::Catalogue;
use crate::error::SpecError;
use crate::parse::types::Specification;

/// Validate a specification. Returns all errors found.
pub fn validate(spec: &Specification, catalogue: &Catalogue) -> Vec<SpecError> {
    let mut errors = Vec::new();

    structural::check_asset_type(spec, catalogue, &mut errors);
    structural::check_interfaces(spec, catalogue, &mut errors);
    structural::check_variables(spec, catalogue, &mut errors);
    structural::check_nodes(spec, catalogue, &mut errors);

    let pins = pins::PinResolver::new(spec, catalogue);
    let connected = connections::check_connections(spec, &pins, catalogue, &mut errors);

    completeness::check_default_keys(spec, catalogue, &mut errors);
    completeness::check_required_inputs(spec, catalogue, &connected, &mut errors);
    completeness::check_interface_pins(spec, catalogue, &mut errors);

    tracing::debug!(
        spec = %spec.name,
        errors = errors.len(),
        "validated graph spec"
    );

    errors
}

/// Parse specification JSON and validate it in one step.
///
/// Parse errors (including missing top-level fields) end the pass early.
pub fn validate_json(json: &str, catalogue: &Catalogue) -> Vec<SpecError> {
    match crate::parse::parse(json) {
        Ok(spec) => validate(&spec, catalogue),
        Err(errors) => errors,
    }
}
