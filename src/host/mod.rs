//! Host harness — serves method calls over a byte stream
//!
//! Stands in for the platform channel: one JSON `MethodCall` per input line,
//! one JSON `MethodReply` per output line.

mod serve;

pub use serve::{serve, ServeSummary};
