//! Pin type resolution across nodes, accessors and the graph boundary.

use std::collections::HashMap;

use crate::catalogue::Catalogue;
use crate::parse::types::*;

/// Looks up the type of a named pin on a connection endpoint.
///
/// Resolution never fails hard: an unknown node, an unknown pin name, a node
/// whose catalogue type is missing, or an accessor whose variable is
/// undeclared all resolve to `None`.
pub struct PinResolver<'a> {
    spec: &'a Specification,
    catalogue: &'a Catalogue,
    nodes: HashMap<&'a str, &'a Node>,
}

impl<'a> PinResolver<'a> {
    pub fn new(spec: &'a Specification, catalogue: &'a Catalogue) -> Self {
        let mut nodes = HashMap::new();
        for node in &spec.nodes {
            // First declaration of a duplicated id supplies the pins.
            nodes.entry(node.id.as_str()).or_insert(node);
        }
        PinResolver {
            spec,
            catalogue,
            nodes,
        }
    }

    /// Whether the endpoint is the graph boundary or a declared node.
    pub fn contains(&self, endpoint: &Endpoint) -> bool {
        match endpoint {
            Endpoint::GraphBoundary => true,
            Endpoint::Node(id) => self.nodes.contains_key(id.as_str()),
        }
    }

    /// Type of a pin read by a connection source.
    ///
    /// On the boundary this is a graph input, which feeds into the graph.
    pub fn output_type(&self, endpoint: &Endpoint, pin: &str) -> Option<&'a str> {
        let id = match endpoint {
            Endpoint::GraphBoundary => {
                return self.spec.input(pin).map(|p| p.pin_type.as_str());
            }
            Endpoint::Node(id) => id,
        };
        let node = self.nodes.get(id.as_str())?;
        match &node.kind {
            NodeKind::VariableGet { variable } | NodeKind::VariableGetDelayed { variable } => {
                self.variable_type(variable)
            }
            NodeKind::VariableSet { .. } => None,
            NodeKind::External { type_name } => self
                .catalogue
                .node_type(type_name)?
                .output(pin)
                .map(|p| p.pin_type.as_str()),
        }
    }

    /// Type of a pin written by a connection destination.
    ///
    /// On the boundary this is a graph output, which receives from the graph.
    pub fn input_type(&self, endpoint: &Endpoint, pin: &str) -> Option<&'a str> {
        let id = match endpoint {
            Endpoint::GraphBoundary => {
                return self.spec.output(pin).map(|p| p.pin_type.as_str());
            }
            Endpoint::Node(id) => id,
        };
        let node = self.nodes.get(id.as_str())?;
        match &node.kind {
            NodeKind::VariableSet { variable } => match pin {
                VARIABLE_VALUE_PIN => self.variable_type(variable),
                VARIABLE_EXECUTE_PIN => Some(TRIGGER_TYPE),
                _ => None,
            },
            NodeKind::VariableGet { .. } | NodeKind::VariableGetDelayed { .. } => None,
            NodeKind::External { type_name } => self
                .catalogue
                .node_type(type_name)?
                .input(pin)
                .map(|p| p.pin_type.as_str()),
        }
    }

    fn variable_type(&self, name: &str) -> Option<&'a str> {
        self.spec.variable(name).map(|v| v.pin_type.as_str())
    }
}
