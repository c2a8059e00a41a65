//! Average line length over an in-memory block of text
//!
//! A line is every segment produced by splitting on `'\n'`, including the
//! empty segments left by leading, consecutive, or trailing breaks. The
//! length of a line is its number of `char`s.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregate line statistics for one block of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStats {
    /// Number of lines, always at least 1 for text produced by [`lines`]
    pub line_count: usize,
    /// Sum of the character counts of all lines, breaks excluded
    pub total_chars: usize,
    /// `total_chars / line_count`, or 0 when there are no lines
    pub average: f64,
}

impl LineStats {
    /// Compute the statistics for `text` in a single pass
    pub fn from_text(text: &str) -> Self {
        let (line_count, total_chars) = lines(text)
            .fold((0usize, 0usize), |(count, total), line| {
                (count + 1, total + line.chars().count())
            });

        let stats = Self::from_totals(line_count, total_chars);
        trace!(
            line_count = stats.line_count,
            total_chars = stats.total_chars,
            average = stats.average,
            "Computed line statistics"
        );
        stats
    }

    /// Build statistics from precomputed totals
    pub fn from_totals(line_count: usize, total_chars: usize) -> Self {
        let average = if line_count == 0 {
            0.0
        } else {
            total_chars as f64 / line_count as f64
        };

        Self {
            line_count,
            total_chars,
            average,
        }
    }
}

/// Split `text` into lines on `'\n'`
///
/// A `'\r'` before a break stays part of its line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Arithmetic mean of the character counts of all lines in `text`
///
/// Total over every input: the empty string is one empty line and yields 0.
pub fn average_line_length(text: &str) -> f64 {
    LineStats::from_text(text).average
}
