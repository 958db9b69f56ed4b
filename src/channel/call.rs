//! Method call envelope

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{json_type_name, Error, Result};

/// A named method invocation with its arguments
///
/// Wire form: `{"method": "analyzeInput", "arguments": {"input": "..."}}`.
/// `arguments` may be omitted or null. `channel` is optional; when present it
/// must match the dispatcher's channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name
    pub method: String,
    /// Argument map (object or null)
    #[serde(default)]
    pub arguments: JsonValue,
    /// Target channel (None = the dispatcher's own channel)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl MethodCall {
    /// Create new method call
    pub fn new(method: impl Into<String>, arguments: JsonValue) -> Self {
        Self {
            method: method.into(),
            arguments,
            channel: None,
        }
    }

    /// Address the call to a specific channel
    pub fn on_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Get a raw argument value
    ///
    /// Missing keys and JSON null are both reported as absent.
    pub fn argument(&self, key: &str) -> Result<Option<&JsonValue>> {
        match &self.arguments {
            JsonValue::Null => Ok(None),
            JsonValue::Object(map) => Ok(map.get(key).filter(|v| !v.is_null())),
            other => Err(Error::InvalidArguments {
                method: self.method.clone(),
                found: json_type_name(other),
            }),
        }
    }

    /// Get a string argument
    ///
    /// Returns `Ok(None)` when absent, an error when present with another type.
    pub fn argument_str(&self, key: &str) -> Result<Option<&str>> {
        match self.argument(key)? {
            None => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(Error::InvalidArgument {
                method: self.method.clone(),
                argument: key.to_string(),
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_argument_str_present() {
        let call = MethodCall::new("analyzeInput", json!({"input": "abc"}));
        assert_eq!(call.argument_str("input").unwrap(), Some("abc"));
    }

    #[test]
    fn test_argument_str_absent() {
        let missing = MethodCall::new("analyzeInput", json!({}));
        assert_eq!(missing.argument_str("input").unwrap(), None);

        let null_value = MethodCall::new("analyzeInput", json!({"input": null}));
        assert_eq!(null_value.argument_str("input").unwrap(), None);

        let null_args = MethodCall::new("analyzeInput", JsonValue::Null);
        assert_eq!(null_args.argument_str("input").unwrap(), None);
    }

    #[test]
    fn test_argument_str_wrong_type() {
        let call = MethodCall::new("analyzeInput", json!({"input": 42}));
        let err = call.argument_str("input").unwrap_err();
        assert_eq!(err.code(), "invalid_argument");
        assert!(err.to_string().contains("found number"));
    }

    #[test]
    fn test_arguments_not_an_object() {
        let call = MethodCall::new("analyzeInput", json!(["input"]));
        let err = call.argument_str("input").unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { found: "array", .. }));
    }

    #[test]
    fn test_deserialize_without_arguments() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"analyzeInput"}"#).unwrap();
        assert_eq!(call.method, "analyzeInput");
        assert_eq!(call.arguments, JsonValue::Null);
        assert_eq!(call.channel, None);
    }
}
