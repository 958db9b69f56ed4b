//! Method handlers: map a `MethodCall` onto the text tools

use serde_json::Value as JsonValue;

use super::{MethodCall, Result};
use crate::text_tools::analyze_input;

/// Handle `analyzeInput`
///
/// A missing or null `input` is delivered to the analyzer as an empty string.
pub fn invoke_analyze_input(call: &MethodCall) -> Result<JsonValue> {
    let input = call.argument_str("input")?.unwrap_or("");
    Ok(JsonValue::String(analyze_input(Some(input))))
}
