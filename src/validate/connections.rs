//! Connection checks: endpoints, pins, and directed type compatibility (V008–V012).

use std::collections::HashSet;

use crate::catalogue::Catalogue;
use crate::error::{ErrorKind, SpecError};
use crate::parse::types::{Endpoint, Specification};

use super::pins::PinResolver;

/// Destination `(endpoint, pin)` pairs targeted by some connection.
pub type ConnectedInputs<'a> = HashSet<(&'a Endpoint, &'a str)>;

/// Check every connection and return the set of inputs they connect.
pub fn check_connections<'a>(
    spec: &'a Specification,
    pins: &PinResolver<'a>,
    catalogue: &Catalogue,
    errors: &mut Vec<SpecError>,
) -> ConnectedInputs<'a> {
    let mut connected = HashSet::new();

    for conn in &spec.connections {
        let from_known = pins.contains(&conn.from_node);
        let to_known = pins.contains(&conn.to_node);
        if !from_known {
            errors.push(SpecError::validate(
                "V008",
                ErrorKind::Structural,
                format!("Connection from_node '{}' does not exist", conn.from_node),
                None,
            ));
        }
        if !to_known {
            errors.push(SpecError::validate(
                "V009",
                ErrorKind::Structural,
                format!("Connection to_node '{}' does not exist", conn.to_node),
                None,
            ));
        }
        if !from_known || !to_known {
            continue;
        }

        let from_type = pins.output_type(&conn.from_node, &conn.from_pin);
        if from_type.is_none() {
            errors.push(SpecError::validate(
                "V010",
                ErrorKind::PinResolution,
                format!(
                    "Output pin '{}' not found on node '{}'",
                    conn.from_pin, conn.from_node
                ),
                node_id(&conn.from_node),
            ));
        }

        let to_type = pins.input_type(&conn.to_node, &conn.to_pin);
        if to_type.is_none() {
            errors.push(SpecError::validate(
                "V011",
                ErrorKind::PinResolution,
                format!(
                    "Input pin '{}' not found on node '{}'",
                    conn.to_pin, conn.to_node
                ),
                node_id(&conn.to_node),
            ));
        }

        if let (Some(from_type), Some(to_type)) = (from_type, to_type) {
            if !catalogue.is_compatible(from_type, to_type) {
                let targets: Vec<&str> =
                    catalogue.compatible_targets(from_type).into_iter().collect();
                errors.push(SpecError::validate(
                    "V012",
                    ErrorKind::Type,
                    format!(
                        "Type mismatch: '{}.{}' outputs '{}' but '{}.{}' expects '{}' \
                         (compatible targets for '{}': {:?})",
                        conn.from_node,
                        conn.from_pin,
                        from_type,
                        conn.to_node,
                        conn.to_pin,
                        to_type,
                        from_type,
                        targets
                    ),
                    node_id(&conn.to_node),
                ));
            }
        }

        connected.insert((&conn.to_node, conn.to_pin.as_str()));
    }

    connected
}

fn node_id(endpoint: &Endpoint) -> Option<String> {
    match endpoint {
        Endpoint::Node(id) => Some(id.clone()),
        Endpoint::GraphBoundary => None,
    }
}
