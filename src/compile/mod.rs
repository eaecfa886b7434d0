//! Compile phase: validated Specification → ordered operation stream.
//!
//! Public API: `compile(spec) -> Vec<Operation>`
//!
//! The input must already have passed `validate`. Nothing is re-checked here
//! and no catalogue is consulted; an invalid specification compiles to an
//! unspecified but well-formed stream.

mod operation;

pub use operation::Operation;

use crate::parse::types::{Node, NodeKind, Specification};

/// Default content location for finalized assets.
pub const DEFAULT_TARGET_LOCATION: &str = "/Game/Audio/Generated/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Where the engine persists the finished graph.
    pub target_location: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            target_location: DEFAULT_TARGET_LOCATION.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn with_target_location(target_location: impl Into<String>) -> Self {
        CompileOptions {
            target_location: target_location.into(),
        }
    }
}

/// Compile with the default target location.
pub fn compile(spec: &Specification) -> Vec<Operation> {
    compile_with(spec, &CompileOptions::default())
}

/// Compile a validated specification into operations in dependency order:
/// begin, interfaces, variables, graph inputs, graph outputs, nodes,
/// defaults, connections, finalize.
pub fn compile_with(spec: &Specification, options: &CompileOptions) -> Vec<Operation> {
    let mut ops = Vec::new();

    ops.push(Operation::BeginGraph {
        asset_kind: spec.asset_type.clone(),
        name: spec.name.clone(),
    });

    ops.extend(spec.interfaces.iter().map(|iface| Operation::AttachInterface {
        interface: iface.clone(),
    }));

    ops.extend(spec.variables.iter().map(|var| Operation::DeclareVariable {
        name: var.name.clone(),
        pin_type: var.pin_type.clone(),
        default: var.default.clone(),
    }));

    ops.extend(spec.inputs.iter().map(|pin| Operation::DeclareGraphInput {
        name: pin.name.clone(),
        pin_type: pin.pin_type.clone(),
        default: pin.default.clone(),
    }));

    ops.extend(spec.outputs.iter().map(|pin| Operation::DeclareGraphOutput {
        name: pin.name.clone(),
        pin_type: pin.pin_type.clone(),
    }));

    ops.extend(spec.nodes.iter().map(place_node));

    for node in spec.nodes.iter().filter(|n| !n.kind.is_accessor()) {
        ops.extend(node.defaults.iter().map(|(input, value)| Operation::SetDefault {
            node_id: node.id.clone(),
            input_name: input.clone(),
            value: value.clone(),
        }));
    }

    ops.extend(spec.connections.iter().map(|conn| Operation::Connect {
        source_node: conn.from_node.clone(),
        source_pin: conn.from_pin.clone(),
        dest_node: conn.to_node.clone(),
        dest_pin: conn.to_pin.clone(),
    }));

    ops.push(Operation::Finalize {
        name: spec.name.clone(),
        target_location: options.target_location.clone(),
    });

    tracing::debug!(spec = %spec.name, operations = ops.len(), "compiled graph spec");

    ops
}

fn place_node(node: &Node) -> Operation {
    match &node.kind {
        NodeKind::External { type_name } => Operation::PlaceNode {
            id: node.id.clone(),
            type_name: type_name.clone(),
            placement: node.position,
        },
        NodeKind::VariableGet { variable } => Operation::PlaceVariableRead {
            id: node.id.clone(),
            variable_name: variable.clone(),
            delayed: false,
        },
        NodeKind::VariableGetDelayed { variable } => Operation::PlaceVariableRead {
            id: node.id.clone(),
            variable_name: variable.clone(),
            delayed: true,
        },
        NodeKind::VariableSet { variable } => Operation::PlaceVariableWrite {
            id: node.id.clone(),
            variable_name: variable.clone(),
        },
    }
}
