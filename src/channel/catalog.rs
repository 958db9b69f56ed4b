//! Method catalog: metadata and handlers for the built-in methods
//!
//! `default_methods()` returns every method a host can call on the channel.

use serde::{Deserialize, Serialize};

use super::dispatcher::RegisteredMethod;
use super::handlers::invoke_analyze_input;

/// Count letters and words in a string
pub const ANALYZE_INPUT: &str = "analyzeInput";

/// Argument type for method parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentType {
    /// String value
    String,
}

/// Specification for a single method argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArgument {
    /// Argument name (key in the call's argument map)
    pub name: String,
    /// Argument type
    pub ty: ArgumentType,
    /// Whether argument is required
    pub required: bool,
    /// Brief description
    pub description: String,
}

impl MethodArgument {
    /// Create new argument specification
    pub fn new(
        name: impl Into<String>,
        ty: ArgumentType,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            required,
            description: description.into(),
        }
    }
}

/// Usage and output example for a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodExample {
    /// Example call
    pub usage: String,
    /// Example result
    pub output: String,
}

impl MethodExample {
    pub fn new(usage: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            output: output.into(),
        }
    }
}

/// Complete metadata for a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    /// Unique method name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Argument specifications
    pub arguments: Vec<MethodArgument>,
    /// Usage examples
    pub examples: Vec<MethodExample>,
}

impl MethodMetadata {
    /// Create new method metadata
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set argument specifications
    pub fn with_arguments(mut self, args: Vec<MethodArgument>) -> Self {
        self.arguments = args;
        self
    }

    /// Add an example
    pub fn with_example(mut self, example: MethodExample) -> Self {
        self.examples.push(example);
        self
    }
}

/// Build default method inventory
pub fn default_methods() -> Vec<RegisteredMethod> {
    vec![RegisteredMethod::new(
        MethodMetadata::new(ANALYZE_INPUT, "Count letters and whitespace-separated words in a string")
            .with_arguments(vec![MethodArgument::new(
                "input",
                ArgumentType::String,
                false,
                "Text to analyze (absent is treated as empty)",
            )])
            .with_example(MethodExample::new(
                "analyzeInput(input=\"Hello world\")",
                "Letters: 10, Words: 2",
            ))
            .with_example(MethodExample::new("analyzeInput()", "Empty input")),
        invoke_analyze_input,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_methods_inventory() {
        let methods = default_methods();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].metadata().name, ANALYZE_INPUT);
    }

    #[test]
    fn test_analyze_input_argument_is_optional_string() {
        let methods = default_methods();
        let input = &methods[0].metadata().arguments[0];
        assert_eq!(input.name, "input");
        assert_eq!(input.ty, ArgumentType::String);
        assert!(!input.required);
    }
}
