//! Response normalization — turns free-form model output into validated JSON.
//!
//! Two passes, always in this order:
//! 1. `extractor` isolates the payload text (code fences and whitespace removed).
//! 2. `validator` parses it and, for typed paths, checks the required top-level keys.

pub mod extractor;
pub mod validator;

use serde_json::Value;
use thiserror::Error;

pub use extractor::extract_payload;
pub use validator::{parse_json, parse_landing_page};

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Empty response from model")]
    EmptyResponse,

    /// `payload` is the exact text handed to the parser, kept for diagnosis.
    #[error("Invalid JSON from model ({source}): {payload}")]
    MalformedJson {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    /// All required keys are present but a value has the wrong type.
    #[error("Response does not match the expected shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Extracts and parses a loosely-structured payload (analysis, chart, MVP).
pub fn extract_json(raw: &str) -> Result<Value, ResponseError> {
    let payload = extract_payload(raw)?;
    parse_json(payload)
}
