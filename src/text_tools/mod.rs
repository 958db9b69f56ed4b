//! Text tools — pure text statistics
//!
//! Deterministic, stateless, Rust stdlib only.

mod analyze;

pub use analyze::{
    analyze, analyze_input, count_letters, count_words, AnalysisReport, TextAnalysis, TextStats,
    EMPTY_INPUT,
};
