//! Primitive construction operations consumed by the graph-building engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parse::types::{Endpoint, Position};

/// One instruction of the operation stream.
///
/// Serialized as a JSON object tagged by `action`. Later operations may refer
/// to entities created by earlier ones, so stream order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Operation {
    BeginGraph {
        asset_kind: String,
        name: String,
    },
    AttachInterface {
        interface: String,
    },
    DeclareVariable {
        name: String,
        #[serde(rename = "type")]
        pin_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    DeclareGraphInput {
        name: String,
        #[serde(rename = "type")]
        pin_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    DeclareGraphOutput {
        name: String,
        #[serde(rename = "type")]
        pin_type: String,
    },
    PlaceNode {
        id: String,
        type_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placement: Option<Position>,
    },
    PlaceVariableRead {
        id: String,
        variable_name: String,
        delayed: bool,
    },
    PlaceVariableWrite {
        id: String,
        variable_name: String,
    },
    SetDefault {
        node_id: String,
        input_name: String,
        value: Value,
    },
    Connect {
        source_node: Endpoint,
        source_pin: String,
        dest_node: Endpoint,
        dest_pin: String,
    },
    Finalize {
        name: String,
        target_location: String,
    },
}

impl Operation {
    /// The `action` tag this operation serializes with.
    pub fn action(&self) -> &'static str {
        match self {
            Operation::BeginGraph { .. } => "begin_graph",
            Operation::AttachInterface { .. } => "attach_interface",
            Operation::DeclareVariable { .. } => "declare_variable",
            Operation::DeclareGraphInput { .. } => "declare_graph_input",
            Operation::DeclareGraphOutput { .. } => "declare_graph_output",
            Operation::PlaceNode { .. } => "place_node",
            Operation::PlaceVariableRead { .. } => "place_variable_read",
            Operation::PlaceVariableWrite { .. } => "place_variable_write",
            Operation::SetDefault { .. } => "set_default",
            Operation::Connect { .. } => "connect",
            Operation::Finalize { .. } => "finalize",
        }
    }

    /// Whether this operation places a node of any kind.
    pub fn is_placement(&self) -> bool {
        matches!(
            self,
            Operation::PlaceNode { .. }
                | Operation::PlaceVariableRead { .. }
                | Operation::PlaceVariableWrite { .. }
        )
    }
}
