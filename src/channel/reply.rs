//! Method reply envelope

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Error;

/// Outcome of a method call
///
/// Wire form is tagged by `status`:
/// - `{"status":"success","result":...}`
/// - `{"status":"not_implemented"}`
/// - `{"status":"error","code":"...","message":"...","details":null}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodReply {
    /// Handler returned a result
    Success { result: JsonValue },
    /// No handler registered for the method name
    NotImplemented,
    /// Call could not be completed
    Error {
        code: String,
        message: String,
        #[serde(default)]
        details: Option<JsonValue>,
    },
}

impl MethodReply {
    /// Successful reply
    pub fn success(result: impl Into<JsonValue>) -> Self {
        MethodReply::Success {
            result: result.into(),
        }
    }

    /// Error reply without details
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodReply::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Check if reply is a success
    pub fn is_success(&self) -> bool {
        matches!(self, MethodReply::Success { .. })
    }

    /// String result, if the reply is a success carrying a string
    pub fn result_str(&self) -> Option<&str> {
        match self {
            MethodReply::Success { result } => result.as_str(),
            _ => None,
        }
    }
}

impl From<&Error> for MethodReply {
    fn from(err: &Error) -> Self {
        MethodReply::error(err.code(), err.to_string())
    }
}
