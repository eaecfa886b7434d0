//! Unified error value shared by the parse and validate phases.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

/// Broad category of a reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing fields, duplicate ids or names, dangling endpoints, undeclared variables.
    Structural,
    /// A name that the catalogue does not know.
    CatalogueLookup,
    /// A pin name that does not exist on the resolved node or boundary.
    PinResolution,
    /// Source and destination pin types are not compatible.
    Type,
    /// Required inputs, interface pins or default keys that are missing.
    Completeness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecError {
    pub code: String,
    pub phase: Phase,
    pub kind: ErrorKind,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.phase, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for SpecError {}

impl SpecError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        SpecError {
            code: code.into(),
            phase: Phase::Parse,
            kind: ErrorKind::Structural,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn validate(
        code: &str,
        kind: ErrorKind,
        message: impl Into<String>,
        node_id: Option<String>,
    ) -> Self {
        SpecError {
            code: code.into(),
            phase: Phase::Validate,
            kind,
            message: message.into(),
            node_id,
        }
    }
}
