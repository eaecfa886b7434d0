//! Read-only registry of node signatures, interfaces and pin types.
//!
//! The catalogue is the validator's only external dependency. It is loaded
//! once (from the embedded MetaSounds data or from a JSON file) and borrowed
//! immutably by every validation call.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const METASOUNDS_JSON: &str = include_str!("metasounds.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{location} references undeclared pin type '{pin_type}'")]
    UndeclaredPinType { location: String, pin_type: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPin {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
    /// Documented default; a required pin with one never needs wiring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPin {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSignature {
    #[serde(default)]
    pub inputs: Vec<InputPin>,
    #[serde(default)]
    pub outputs: Vec<OutputPin>,
}

impl NodeSignature {
    pub fn input(&self, name: &str) -> Option<&InputPin> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&OutputPin> {
        self.outputs.iter().find(|p| p.name == name)
    }
}

/// A graph boundary pin mandated by an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryPin {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDef {
    #[serde(default)]
    pub inputs: Vec<BoundaryPin>,
    #[serde(default)]
    pub outputs: Vec<BoundaryPin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub asset_types: BTreeSet<String>,
    #[serde(default)]
    pub pin_types: BTreeSet<String>,
    /// Source pin type → destination pin types it may feed.
    #[serde(default)]
    pub compatibility: HashMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub interfaces: HashMap<String, InterfaceDef>,
    #[serde(default)]
    pub node_types: HashMap<String, NodeSignature>,
}

impl Catalogue {
    /// The built-in MetaSounds catalogue.
    pub fn metasounds() -> Result<Self, CatalogueError> {
        Self::from_json(METASOUNDS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let catalogue: Catalogue = serde_json::from_str(json)?;
        catalogue.check_pin_types()?;
        Ok(catalogue)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalogue = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            node_types = catalogue.node_types.len(),
            interfaces = catalogue.interfaces.len(),
            "loaded catalogue"
        );
        Ok(catalogue)
    }

    /// Every pin type named by the compatibility table, a node signature or
    /// an interface must be declared in `pin_types`.
    fn check_pin_types(&self) -> Result<(), CatalogueError> {
        for (source, targets) in &self.compatibility {
            let location = || format!("compatibility entry '{source}'");
            self.require_pin_type(source, location)?;
            for target in targets {
                self.require_pin_type(target, location)?;
            }
        }
        for (name, signature) in &self.node_types {
            for pin in &signature.inputs {
                self.require_pin_type(&pin.pin_type, || {
                    format!("node type '{name}' input '{}'", pin.name)
                })?;
            }
            for pin in &signature.outputs {
                self.require_pin_type(&pin.pin_type, || {
                    format!("node type '{name}' output '{}'", pin.name)
                })?;
            }
        }
        for (name, iface) in &self.interfaces {
            for pin in &iface.inputs {
                self.require_pin_type(&pin.pin_type, || {
                    format!("interface '{name}' input '{}'", pin.name)
                })?;
            }
            for pin in &iface.outputs {
                self.require_pin_type(&pin.pin_type, || {
                    format!("interface '{name}' output '{}'", pin.name)
                })?;
            }
        }
        Ok(())
    }

    fn require_pin_type(
        &self,
        pin_type: &str,
        location: impl FnOnce() -> String,
    ) -> Result<(), CatalogueError> {
        if self.pin_types.contains(pin_type) {
            return Ok(());
        }
        Err(CatalogueError::UndeclaredPinType {
            location: location(),
            pin_type: pin_type.to_string(),
        })
    }

    pub fn node_type(&self, name: &str) -> Option<&NodeSignature> {
        self.node_types.get(name)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceDef> {
        self.interfaces.get(name)
    }

    pub fn is_asset_type(&self, name: &str) -> bool {
        self.asset_types.contains(name)
    }

    pub fn is_pin_type(&self, name: &str) -> bool {
        self.pin_types.contains(name)
    }

    /// Destination types that `source` may legally feed, itself included.
    ///
    /// Empty for an undeclared source type.
    pub fn compatible_targets<'a>(&'a self, source: &'a str) -> BTreeSet<&'a str> {
        if !self.is_pin_type(source) {
            return BTreeSet::new();
        }
        let mut targets: BTreeSet<&str> = self
            .compatibility
            .get(source)
            .map(|t| t.iter().map(String::as_str).collect())
            .unwrap_or_default();
        targets.insert(source);
        targets
    }

    /// Directed compatibility: `source` output may drive a `dest` input.
    /// A declared type always feeds itself.
    pub fn is_compatible(&self, source: &str, dest: &str) -> bool {
        if !self.is_pin_type(source) {
            return false;
        }
        source == dest
            || self
                .compatibility
                .get(source)
                .is_some_and(|targets| targets.contains(dest))
    }
}
