//! Dummy test data synthesis
//!
//! Turns extracted parameter descriptors into the compact JSON objects that end
//! up in `data.json`. Only first-level values are produced; object and array
//! parameters collapse to an empty string.

use serde_json::{Map, Value};

use crate::core::error::Result;
use crate::infrastructure::openapi::ParamSpec;

/// Placeholder used for string parameters without an example
pub const DUMMY_STRING: &str = "dummy";

/// Build a compact JSON object keyed by parameter name.
///
/// Keys keep the order of `params`. A repeated name keeps its first position
/// and takes the last value.
///
/// # Examples
/// ```
/// use openapi2runn::generation::synthesizer::synthesize;
/// use openapi2runn::infrastructure::openapi::ParamSpec;
///
/// let params = vec![ParamSpec::new("q", "string"), ParamSpec::new("limit", "number")];
/// assert_eq!(synthesize(&params).unwrap(), r#"{"q":"dummy","limit":0}"#);
/// ```
pub fn synthesize(params: &[ParamSpec]) -> Result<String> {
    let object: Map<String, Value> = params
        .iter()
        .map(|param| (param.name.clone(), dummy_value(param)))
        .collect();

    Ok(serde_json::to_string(&Value::Object(object))?)
}

fn dummy_value(param: &ParamSpec) -> Value {
    match param.schema_type.as_str() {
        "string" => param
            .example
            .clone()
            .unwrap_or_else(|| Value::String(DUMMY_STRING.to_string())),
        // Numeric examples are not honoured
        "number" => Value::from(0),
        _ => Value::String(String::new()),
    }
}
