//! Line classification

use crate::config::Markers;

/// Which rewrite rule applies to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Rotation function header; gets the suffix inserted.
    FunctionHeader,
    /// Facelet assignment; gets its coordinate columns swapped.
    Assignment,
    /// Anything else; emitted as-is.
    Passthrough,
}

/// Classify a line by substring containment.
///
/// The header marker wins when a line contains both.
pub fn classify(line: &str, markers: &Markers) -> LineKind {
    if line.contains(markers.function.as_str()) {
        LineKind::FunctionHeader
    } else if line.contains(markers.assignment.as_str()) {
        LineKind::Assignment
    } else {
        LineKind::Passthrough
    }
}
