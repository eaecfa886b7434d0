use graphspec::catalogue::Catalogue;
use graphspec::error::SpecError;
use graphspec::parse::*;

// =============================================================================
// Catalogue + endpoint shorthands
// =============================================================================

pub fn catalogue() -> Catalogue {
    Catalogue::metasounds().expect("built-in catalogue should load")
}

pub fn boundary() -> Endpoint {
    Endpoint::GraphBoundary
}

pub fn node(id: &str) -> Endpoint {
    Endpoint::node(id)
}

pub fn connect(from: Endpoint, from_pin: &str, to: Endpoint, to_pin: &str) -> Connection {
    Connection::new(from, from_pin, to, to_pin)
}

pub fn input(name: &str, pin_type: &str) -> GraphInput {
    GraphInput {
        name: name.into(),
        pin_type: pin_type.into(),
        default: None,
    }
}

pub fn output(name: &str, pin_type: &str) -> GraphOutput {
    GraphOutput {
        name: name.into(),
        pin_type: pin_type.into(),
    }
}

pub fn variable(name: &str, pin_type: &str) -> Variable {
    Variable {
        name: name.into(),
        pin_type: pin_type.into(),
        default: None,
    }
}

pub fn var_get(id: &str, var: &str) -> Node {
    Node::with_kind(id, NodeKind::VariableGet { variable: var.into() })
}

pub fn var_get_delayed(id: &str, var: &str) -> Node {
    Node::with_kind(id, NodeKind::VariableGetDelayed { variable: var.into() })
}

pub fn var_set(id: &str, var: &str) -> Node {
    Node::with_kind(id, NodeKind::VariableSet { variable: var.into() })
}

// =============================================================================
// Specification builders
// =============================================================================

/// One sine oscillator with its frequency set, wired to a single graph output.
pub fn minimal_spec() -> Specification {
    let mut spec = Specification::new("Minimal", "Patch");
    spec.outputs.push(output("Out", "Audio"));
    spec.nodes.push(Node::external("osc", "Sine").with_default("Frequency", 220));
    spec.connections.push(connect(node("osc"), "Audio", boundary(), "Out"));
    spec
}

/// A playable one-shot source satisfying the `UE.Source.OneShot` interface.
pub fn one_shot_spec() -> Specification {
    let mut spec = Specification::new("TestSound", "Source");
    spec.interfaces.push("UE.Source.OneShot".into());
    spec.inputs.push(input("OnPlay", "Trigger"));
    spec.outputs.extend([
        output("Out Mono", "Audio"),
        output("Out Stereo L", "Audio"),
        output("Out Stereo R", "Audio"),
        output("OnFinished", "Trigger"),
    ]);
    spec.nodes.push(
        Node::external("sine1", "Sine")
            .with_default("Frequency", 440.0)
            .at(100.0, 100.0),
    );
    spec.connections
        .push(connect(node("sine1"), "Audio", boundary(), "Out Mono"));
    spec
}

/// A Float variable written from graph inputs and read back out.
pub fn variable_spec() -> Specification {
    let mut spec = Specification::new("VarTest", "Patch");
    spec.variables.push(variable("Level", "Float"));
    spec.inputs.push(input("Gain", "Float"));
    spec.inputs.push(input("OnPlay", "Trigger"));
    spec.outputs.push(output("Level Out", "Float"));
    spec.nodes.push(var_set("set_level", "Level"));
    spec.nodes.push(var_get("get_level", "Level"));
    spec.connections.extend([
        connect(boundary(), "Gain", node("set_level"), "Value"),
        connect(boundary(), "OnPlay", node("set_level"), "Execute"),
        connect(node("get_level"), "Value", boundary(), "Level Out"),
    ]);
    spec
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_has_error(errors: &[SpecError], code: &str) {
    assert!(
        errors.iter().any(|e| e.code == code),
        "Expected error {}, got: {:?}",
        code,
        errors
    );
}

pub fn assert_no_error(errors: &[SpecError], code: &str) {
    assert!(
        !errors.iter().any(|e| e.code == code),
        "Did not expect error {}, but got: {:?}",
        code,
        errors
    );
}

pub fn actions(ops: &[graphspec::compile::Operation]) -> Vec<&'static str> {
    ops.iter().map(|op| op.action()).collect()
}
