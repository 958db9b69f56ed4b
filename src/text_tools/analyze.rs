//! analyze — Letter and word statistics for a single string
//!
//! Usage:
//! - `analyze(Some("Hello world"))` → `TextAnalysis::Counted { letters: 10, words: 2 }`
//! - `analyze_input(None)` → `"Empty input"`
//!
//! Absent and zero-length input both yield the `Empty input` sentinel.
//! Whitespace-only input is non-empty and is counted (zero letters, zero words).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One char in Unicode general category L (Lu, Ll, Lt, Lm, Lo)
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").unwrap());

/// Runs of ASCII whitespace; NBSP, U+3000 and friends do not separate words
static WORD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

/// Summary returned for absent or zero-length input
pub const EMPTY_INPUT: &str = "Empty input";

/// Letter and word counts for non-empty input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStats {
    /// Characters in Unicode general category L
    pub letters: usize,
    /// Whitespace-separated segments
    pub words: usize,
}

/// Outcome of analyzing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnalysis {
    /// Input was absent or had zero length
    Empty,
    /// Input had at least one character
    Counted(TextStats),
}

impl TextAnalysis {
    /// Counts, if the input was non-empty
    pub fn stats(&self) -> Option<TextStats> {
        match self {
            TextAnalysis::Empty => None,
            TextAnalysis::Counted(stats) => Some(*stats),
        }
    }
}

impl fmt::Display for TextAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextAnalysis::Empty => f.write_str(EMPTY_INPUT),
            TextAnalysis::Counted(stats) => {
                write!(f, "Letters: {}, Words: {}", stats.letters, stats.words)
            }
        }
    }
}

/// Serializable form of an analysis (for JSON output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Display form, identical to `analyze_input`
    pub summary: String,
    /// Letter count (None for empty input)
    pub letters: Option<usize>,
    /// Word count (None for empty input)
    pub words: Option<usize>,
}

impl From<TextAnalysis> for AnalysisReport {
    fn from(analysis: TextAnalysis) -> Self {
        let stats = analysis.stats();
        AnalysisReport {
            summary: analysis.to_string(),
            letters: stats.map(|s| s.letters),
            words: stats.map(|s| s.words),
        }
    }
}

/// Analyze an optional string
pub fn analyze(input: Option<&str>) -> TextAnalysis {
    match input {
        None | Some("") => TextAnalysis::Empty,
        Some(text) => TextAnalysis::Counted(TextStats {
            letters: count_letters(text),
            words: count_words(text),
        }),
    }
}

/// Analyze an optional string and format the summary
///
/// Returns `"Empty input"` or `"Letters: <N>, Words: <M>"`. Never fails.
pub fn analyze_input(input: Option<&str>) -> String {
    analyze(input).to_string()
}

/// Count letters (general category L)
///
/// Combining marks, letter numbers (Ⅻ) and symbols such as Ⓐ are not letters.
pub fn count_letters(text: &str) -> usize {
    LETTER.find_iter(text).count()
}

/// Count words separated by runs of whitespace
///
/// Trimming is Unicode-aware, so whitespace-only text has zero words.
/// Inside the text only ASCII whitespace separates words.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    WORD_SEPARATOR.split(trimmed).count()
}
