//! TextBridge: native text statistics exposed to a host over a method channel
//!
//! A host invokes named methods with a JSON argument map and receives a
//! reply. The only method is `analyzeInput`, which counts letters and words.

pub mod channel;
pub mod cli;
pub mod config;
pub mod host;
pub mod logging;
pub mod text_tools;

// Re-export the analyzer
pub use text_tools::{analyze, analyze_input, TextAnalysis, TextStats};

// Re-export channel types
pub use channel::{MethodCall, MethodDispatcher, MethodReply};
