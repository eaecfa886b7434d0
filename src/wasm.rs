//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::catalogue::Catalogue;
use crate::compile::{CompileOptions, Operation};
use crate::error::{ErrorKind, SpecError};

/// Validate a graph spec JSON against a catalogue JSON.
/// An empty catalogue string selects the built-in MetaSounds catalogue.
/// Returns a JSON array of error objects.
#[wasm_bindgen]
pub fn validate_graph_spec(spec_json: &str, catalogue_json: &str) -> JsValue {
    let result = validate_graph_spec_inner(spec_json, catalogue_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_graph_spec_inner(spec_json: &str, catalogue_json: &str) -> Vec<ErrorDto> {
    let catalogue = match load_catalogue(catalogue_json) {
        Ok(c) => c,
        Err(e) => return vec![e],
    };
    crate::validate::validate_json(spec_json, &catalogue)
        .into_iter()
        .map(ErrorDto::from)
        .collect()
}

/// Full pipeline: parse → validate → compile.
/// Returns a JSON object with either `operations` (success) or `errors` (failure).
#[wasm_bindgen]
pub fn compile_graph_spec(spec_json: &str, catalogue_json: &str, target_location: &str) -> JsValue {
    let result = compile_graph_spec_inner(spec_json, catalogue_json, target_location);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_graph_spec_inner(
    spec_json: &str,
    catalogue_json: &str,
    target_location: &str,
) -> CompileResult {
    let catalogue = match load_catalogue(catalogue_json) {
        Ok(c) => c,
        Err(e) => return CompileResult::Errors { errors: vec![e] },
    };

    let spec = match crate::parse::parse(spec_json) {
        Ok(s) => s,
        Err(errors) => {
            return CompileResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    let options = if target_location.is_empty() {
        CompileOptions::default()
    } else {
        CompileOptions::with_target_location(target_location)
    };

    match crate::pipeline::build(&spec, &catalogue, &options) {
        Ok(operations) => CompileResult::Success { operations },
        Err(errors) => CompileResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    }
}

fn load_catalogue(catalogue_json: &str) -> Result<Catalogue, ErrorDto> {
    let loaded = if catalogue_json.trim().is_empty() {
        Catalogue::metasounds()
    } else {
        Catalogue::from_json(catalogue_json)
    };
    loaded.map_err(|e| ErrorDto {
        code: "C001".into(),
        phase: "Catalogue".into(),
        kind: None,
        message: e.to_string(),
        node_id: None,
    })
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    /// Error category; absent when the catalogue itself failed to load.
    kind: Option<ErrorKind>,
    message: String,
    node_id: Option<String>,
}

impl From<SpecError> for ErrorDto {
    fn from(e: SpecError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            kind: Some(e.kind),
            message: e.message,
            node_id: e.node_id,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { operations: Vec<Operation> },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
