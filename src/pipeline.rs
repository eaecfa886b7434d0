//! Validate → compile → replay against a graph-building engine.

use crate::catalogue::Catalogue;
use crate::compile::{self, CompileOptions, Operation};
use crate::error::SpecError;
use crate::parse::types::Specification;
use crate::validate;

/// Failure reported by the engine for a single operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operation {index} ({action}) failed: {source}")]
pub struct ReplayError {
    /// Position of the failing operation in the stream.
    pub index: usize,
    pub action: &'static str,
    pub source: TransportError,
}

/// Delivers one operation at a time to the engine.
pub trait Transport {
    fn send(&mut self, op: &Operation) -> Result<(), TransportError>;
}

/// Validate, then compile when no errors were found.
pub fn build(
    spec: &Specification,
    catalogue: &Catalogue,
    options: &CompileOptions,
) -> Result<Vec<Operation>, Vec<SpecError>> {
    let errors = validate::validate(spec, catalogue);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(compile::compile_with(spec, options))
}

/// Send operations in order, stopping at the first failure.
///
/// Returns the number of operations sent. Failed sends are not retried.
pub fn replay<T: Transport + ?Sized>(
    ops: &[Operation],
    transport: &mut T,
) -> Result<usize, ReplayError> {
    for (index, op) in ops.iter().enumerate() {
        tracing::trace!(index, action = op.action(), "sending operation");
        if let Err(source) = transport.send(op) {
            tracing::warn!(index, action = op.action(), error = %source, "operation failed");
            return Err(ReplayError {
                index,
                action: op.action(),
                source,
            });
        }
    }
    Ok(ops.len())
}
