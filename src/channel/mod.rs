//! Method channel — named operations invoked by a host with a JSON payload
//!
//! ## Architecture
//!
//! - `call` — `MethodCall` request envelope and argument extraction
//! - `reply` — `MethodReply` outcome (success, not implemented, error)
//! - `catalog` — metadata and handlers for the built-in methods
//! - `dispatcher` — dispatch table from method name to handler
//!
//! The dispatcher is built once at startup and passed explicitly to whatever
//! serves requests. There is no global registration.

mod call;
mod catalog;
mod dispatcher;
mod handlers;
mod reply;

pub use call::MethodCall;
pub use catalog::{
    default_methods, ArgumentType, MethodArgument, MethodExample, MethodMetadata, ANALYZE_INPUT,
};
pub use dispatcher::{MethodDispatcher, MethodHandler, RegisteredMethod};
pub use handlers::invoke_analyze_input;
pub use reply::MethodReply;

/// Channel name the host registers its handler on
pub const DEFAULT_CHANNEL: &str = "com.example.flutter/hive_channel";

/// Method channel errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument '{argument}' for method '{method}': expected {expected}, found {found}")]
    InvalidArgument {
        method: String,
        argument: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid arguments for method '{method}': expected an object, found {found}")]
    InvalidArguments { method: String, found: &'static str },

    #[error("Channel not found: '{0}'")]
    ChannelNotFound(String),

    #[error("Method already registered: '{0}'")]
    DuplicateMethod(String),
}

impl Error {
    /// Stable error code carried in `MethodReply::Error`
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument { .. } | Error::InvalidArguments { .. } => "invalid_argument",
            Error::ChannelNotFound(_) => "channel_not_found",
            Error::DuplicateMethod(_) => "duplicate_method",
        }
    }
}

/// Result type for channel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
