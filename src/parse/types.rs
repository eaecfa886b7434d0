//! Rust types for the graph specification document.
//!
//! These types are the serde target for specification JSON. The wire format
//! overloads two string fields (`node_type` and connection endpoints) with
//! reserved sentinel values; both are lifted into enums here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved endpoint id addressing the graph's own inputs and outputs.
pub const GRAPH_BOUNDARY: &str = "__graph__";

/// Reserved `node_type` values for the variable accessor kinds.
pub const VARIABLE_GET_TYPE: &str = "__variable_get__";
pub const VARIABLE_GET_DELAYED_TYPE: &str = "__variable_get_delayed__";
pub const VARIABLE_SET_TYPE: &str = "__variable_set__";

/// Fixed pin names on a variable-set node.
pub const VARIABLE_VALUE_PIN: &str = "Value";
pub const VARIABLE_EXECUTE_PIN: &str = "Execute";

/// Pin type of every execute pin.
pub const TRIGGER_TYPE: &str = "Trigger";

// =============================================================================
// TOP-LEVEL SPECIFICATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub asset_type: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub inputs: Vec<GraphInput>,
    #[serde(default)]
    pub outputs: Vec<GraphOutput>,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl Specification {
    /// An empty specification with the given name and asset type.
    pub fn new(name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Specification {
            name: name.into(),
            asset_type: asset_type.into(),
            interfaces: Vec::new(),
            variables: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn input(&self, name: &str) -> Option<&GraphInput> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&GraphOutput> {
        self.outputs.iter().find(|p| p.name == name)
    }
}

// =============================================================================
// GRAPH-LEVEL STATE AND BOUNDARY PINS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
}

/// Editor placement hint, `[x, y]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

// =============================================================================
// NODES
// =============================================================================

/// What a node is, and therefore where its pins come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A catalogue node; pins come from the catalogue entry for `type_name`.
    External { type_name: String },
    /// Reads a graph variable. One output typed as the variable.
    VariableGet { variable: String },
    /// Reads the value the variable held on the previous evaluation frame.
    VariableGetDelayed { variable: String },
    /// Writes a graph variable through a `Value` and an `Execute` input.
    VariableSet { variable: String },
}

impl NodeKind {
    /// Wire value of `node_type` for this kind.
    pub fn node_type(&self) -> &str {
        match self {
            NodeKind::External { type_name } => type_name.as_str(),
            NodeKind::VariableGet { .. } => VARIABLE_GET_TYPE,
            NodeKind::VariableGetDelayed { .. } => VARIABLE_GET_DELAYED_TYPE,
            NodeKind::VariableSet { .. } => VARIABLE_SET_TYPE,
        }
    }

    /// The variable an accessor kind touches; `None` for external nodes.
    pub fn variable(&self) -> Option<&str> {
        match self {
            NodeKind::External { .. } => None,
            NodeKind::VariableGet { variable }
            | NodeKind::VariableGetDelayed { variable }
            | NodeKind::VariableSet { variable } => Some(variable.as_str()),
        }
    }

    pub fn is_accessor(&self) -> bool {
        self.variable().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub position: Option<Position>,
    /// Literal values for input pins, in document order.
    pub defaults: Map<String, Value>,
}

impl Node {
    pub fn external(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Node::with_kind(
            id,
            NodeKind::External {
                type_name: type_name.into(),
            },
        )
    }

    pub fn with_kind(id: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            id: id.into(),
            kind,
            position: None,
            defaults: Map::new(),
        }
    }

    pub fn with_default(mut self, pin: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(pin.into(), value.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position(x, y));
        self
    }
}

/// Flat wire shape of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNode {
    id: String,
    node_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    variable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    defaults: Map<String, Value>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let variable = raw.variable_name;
        let kind = match raw.node_type.as_str() {
            VARIABLE_GET_TYPE => NodeKind::VariableGet { variable },
            VARIABLE_GET_DELAYED_TYPE => NodeKind::VariableGetDelayed { variable },
            VARIABLE_SET_TYPE => NodeKind::VariableSet { variable },
            _ => NodeKind::External {
                type_name: raw.node_type,
            },
        };
        Node {
            id: raw.id,
            kind,
            position: raw.position,
            defaults: raw.defaults,
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let node_type = node.kind.node_type().to_string();
        let variable_name = node.kind.variable().unwrap_or_default().to_string();
        RawNode {
            id: node.id,
            node_type,
            variable_name,
            position: node.position,
            defaults: node.defaults,
        }
    }
}

// =============================================================================
// CONNECTIONS
// =============================================================================

/// One end of a connection: an ordinary node, or the graph boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Endpoint {
    Node(String),
    GraphBoundary,
}

impl Endpoint {
    pub fn node(id: impl Into<String>) -> Self {
        Endpoint::Node(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Endpoint::Node(id) => id.as_str(),
            Endpoint::GraphBoundary => GRAPH_BOUNDARY,
        }
    }
}

impl From<String> for Endpoint {
    fn from(s: String) -> Self {
        if s == GRAPH_BOUNDARY {
            Endpoint::GraphBoundary
        } else {
            Endpoint::Node(s)
        }
    }
}

impl From<Endpoint> for String {
    fn from(e: Endpoint) -> Self {
        match e {
            Endpoint::Node(id) => id,
            Endpoint::GraphBoundary => GRAPH_BOUNDARY.to_string(),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: Endpoint,
    pub from_pin: String,
    pub to_node: Endpoint,
    pub to_pin: String,
}

impl Connection {
    pub fn new(
        from_node: Endpoint,
        from_pin: impl Into<String>,
        to_node: Endpoint,
        to_pin: impl Into<String>,
    ) -> Self {
        Connection {
            from_node,
            from_pin: from_pin.into(),
            to_node,
            to_pin: to_pin.into(),
        }
    }
}
