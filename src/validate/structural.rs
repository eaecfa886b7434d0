//! Declaration checks: asset type, interfaces, variables, nodes (V001–V007).

use std::collections::HashSet;

use crate::catalogue::Catalogue;
use crate::error::{ErrorKind, SpecError};
use crate::parse::types::{NodeKind, Specification};

pub fn check_asset_type(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    if !catalogue.is_asset_type(&spec.asset_type) {
        let known: Vec<&String> = catalogue.asset_types.iter().collect();
        errors.push(SpecError::validate(
            "V001",
            ErrorKind::CatalogueLookup,
            format!(
                "Invalid asset_type '{}'. Must be one of: {:?}",
                spec.asset_type, known
            ),
            None,
        ));
    }
}

pub fn check_interfaces(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    for iface in &spec.interfaces {
        if catalogue.interface(iface).is_none() {
            let mut known: Vec<&String> = catalogue.interfaces.keys().collect();
            known.sort();
            errors.push(SpecError::validate(
                "V002",
                ErrorKind::CatalogueLookup,
                format!("Unknown interface '{}'. Valid interfaces: {:?}", iface, known),
                None,
            ));
        }
    }
}

pub fn check_variables(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    let mut seen = HashSet::new();
    for var in &spec.variables {
        if !seen.insert(var.name.as_str()) {
            errors.push(SpecError::validate(
                "V003",
                ErrorKind::Structural,
                format!("Duplicate variable name: '{}'", var.name),
                None,
            ));
        }
        if !catalogue.is_pin_type(&var.pin_type) {
            errors.push(SpecError::validate(
                "V004",
                ErrorKind::CatalogueLookup,
                format!("Variable '{}' has invalid type '{}'", var.name, var.pin_type),
                None,
            ));
        }
    }
}

/// Per-node checks. A node with a problem is still kept for later passes;
/// its pins simply fail to resolve.
pub fn check_nodes(spec: &Specification, catalogue: &Catalogue, errors: &mut Vec<SpecError>) {
    let mut seen = HashSet::new();
    for node in &spec.nodes {
        let node_id = Some(node.id.clone());

        if !seen.insert(node.id.as_str()) {
            errors.push(SpecError::validate(
                "V005",
                ErrorKind::Structural,
                format!("Duplicate node ID: '{}'", node.id),
                node_id.clone(),
            ));
        }

        match &node.kind {
            NodeKind::External { type_name } => {
                if catalogue.node_type(type_name).is_none() {
                    errors.push(SpecError::validate(
                        "V007",
                        ErrorKind::CatalogueLookup,
                        format!(
                            "Node '{}' references unknown node_type '{}'",
                            node.id, type_name
                        ),
                        node_id,
                    ));
                }
            }
            NodeKind::VariableGet { variable }
            | NodeKind::VariableGetDelayed { variable }
            | NodeKind::VariableSet { variable } => {
                if spec.variable(variable).is_none() {
                    errors.push(SpecError::validate(
                        "V006",
                        ErrorKind::Structural,
                        format!(
                            "Node '{}' references undeclared variable '{}'",
                            node.id, variable
                        ),
                        node_id,
                    ));
                }
            }
        }
    }
}
