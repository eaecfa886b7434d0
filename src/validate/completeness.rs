//! Completeness checks: default keys, required inputs, interface pins (V013–V016).

use std::collections::HashSet;

use crate::catalogue::Catalogue;
use crate::error::{ErrorKind, SpecError};
use crate::parse::types::{Endpoint, NodeKind, Specification};

use super::connections::ConnectedInputs;

/// Every key in a node's `defaults` must name one of its catalogue inputs.
///
/// Accessor nodes have fixed pins and are exempt, as are nodes whose type
/// was already reported unknown.
pub fn check_default_keys(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    for node in &spec.nodes {
        let NodeKind::External { type_name } = &node.kind else {
            continue;
        };
        let Some(signature) = catalogue.node_type(type_name) else {
            continue;
        };
        for key in node.defaults.keys() {
            if signature.input(key).is_none() {
                errors.push(SpecError::validate(
                    "V013",
                    ErrorKind::Completeness,
                    format!(
                        "Node '{}' ({}): default '{}' does not name an input pin",
                        node.id, type_name, key
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
    }
}

/// Required catalogue inputs must be connected or carry a literal default,
/// either on the node or documented on the catalogue pin.
pub fn check_required_inputs(
    spec: &Specification,
    catalogue: &Catalogue,
    connected: &ConnectedInputs<'_>,
    errors: &mut Vec<SpecError>,
) {
    for node in &spec.nodes {
        let NodeKind::External { type_name } = &node.kind else {
            continue;
        };
        let Some(signature) = catalogue.node_type(type_name) else {
            continue;
        };
        let endpoint = Endpoint::node(node.id.as_str());
        for pin in signature.inputs.iter().filter(|p| p.required) {
            let is_connected = connected.contains(&(&endpoint, pin.name.as_str()));
            let has_default = node.defaults.contains_key(&pin.name) || pin.default.is_some();
            if !is_connected && !has_default {
                errors.push(SpecError::validate(
                    "V014",
                    ErrorKind::Completeness,
                    format!(
                        "Node '{}' ({}): required input '{}' is neither connected nor has a default",
                        node.id, type_name, pin.name
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
    }
}

/// Every boundary pin an interface mandates must be declared on the graph.
pub fn check_interface_pins(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    let input_names: HashSet<&str> = spec.inputs.iter().map(|p| p.name.as_str()).collect();
    let output_names: HashSet<&str> = spec.outputs.iter().map(|p| p.name.as_str()).collect();

    for iface_name in &spec.interfaces {
        let Some(iface) = catalogue.interface(iface_name) else {
            continue;
        };

        for pin in &iface.inputs {
            if !input_names.contains(pin.name.as_str()) {
                errors.push(SpecError::validate(
                    "V015",
                    ErrorKind::Completeness,
                    format!(
                        "Interface '{}' requires graph input '{}' but it is missing",
                        iface_name, pin.name
                    ),
                    None,
                ));
            }
        }

        for pin in &iface.outputs {
            if !output_names.contains(pin.name.as_str()) {
                errors.push(SpecError::validate(
                    "V016",
                    ErrorKind::Completeness,
                    format!(
                        "Interface '{}' requires graph output '{}' but it is missing",
                        iface_name, pin.name
                    ),
                    None,
                ));
            }
        }
    }
}
