//! Validate and compile declarative audio graph specifications.
//!
//! A [`parse::Specification`] is checked against a [`catalogue::Catalogue`]
//! by [`validate::validate`]; a clean specification is turned into an ordered
//! stream of [`compile::Operation`]s by [`compile::compile`] for an external
//! graph-building engine to execute one at a time.

pub mod catalogue;
pub mod compile;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod validate;
pub mod wasm;
