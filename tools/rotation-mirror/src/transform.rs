//! Line transformer
//!
//! Rewrites forward rotation source into its mirror image one line at a
//! time. Header lines get a suffix inserted at a fixed offset, assignment
//! lines get two fixed column pairs exchanged, everything else is copied.
//! Offsets count characters, not bytes.

use tracing::{debug, info};

use crate::config::{MirrorConfig, SwapColumns};
use crate::error::MirrorError;
use crate::model::{LineKind, classify};

/// Per-kind line counts from one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub headers: usize,
    pub assignments: usize,
    pub passthrough: usize,
}

impl TransformStats {
    pub fn total(&self) -> usize {
        self.headers + self.assignments + self.passthrough
    }
}

/// Insert `suffix` after the first `offset` characters of `line`.
///
/// Lines shorter than `offset` get the suffix appended.
pub fn insert_suffix(line: &str, offset: usize, suffix: &str) -> String {
    let split = line
        .char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());

    let mut out = String::with_capacity(line.len() + suffix.len());
    out.push_str(&line[..split]);
    out.push_str(suffix);
    out.push_str(&line[split..]);
    out
}

/// Exchange `left` with `right` and `left + stride` with `right + stride`.
///
/// Returns `None` when the line is too short to hold the furthest pair.
pub fn swap_columns(line: &str, swap: &SwapColumns) -> Option<String> {
    let mut chars: Vec<char> = line.chars().collect();
    if chars.len() < swap.required_len() {
        return None;
    }

    chars.swap(swap.left, swap.right);
    chars.swap(swap.left + swap.stride, swap.right + swap.stride);
    Some(chars.into_iter().collect())
}

/// Applies the three rewrite rules under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: MirrorConfig,
}

impl Transformer {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    /// Rewrite a single line. `line_no` is 1-based and only used for errors.
    pub fn transform_line(&self, line_no: usize, line: &str) -> Result<String, MirrorError> {
        self.rewrite(classify(line, &self.config.markers), line_no, line)
    }

    fn rewrite(&self, kind: LineKind, line_no: usize, line: &str) -> Result<String, MirrorError> {
        match kind {
            LineKind::FunctionHeader => Ok(insert_suffix(
                line,
                self.config.header.offset,
                &self.config.header.suffix,
            )),
            LineKind::Assignment => {
                swap_columns(line, &self.config.swap).ok_or_else(|| MirrorError::LineTooShort {
                    line: line_no,
                    len: line.chars().count(),
                    required: self.config.swap.required_len(),
                })
            }
            LineKind::Passthrough => Ok(line.to_string()),
        }
    }

    /// Rewrite every line of `text`, split on `'\n'`.
    ///
    /// The first malformed line aborts the pass; no partial output is returned.
    pub fn transform_text(&self, text: &str) -> Result<Vec<String>, MirrorError> {
        let (lines, _) = self.transform_text_with_stats(text)?;
        Ok(lines)
    }

    pub fn transform_text_with_stats(
        &self,
        text: &str,
    ) -> Result<(Vec<String>, TransformStats), MirrorError> {
        let mut stats = TransformStats::default();
        let mut out = Vec::new();

        for (idx, line) in text.split('\n').enumerate() {
            let kind = classify(line, &self.config.markers);
            match kind {
                LineKind::FunctionHeader => {
                    debug!(line = idx + 1, "renaming rotation header");
                    stats.headers += 1;
                }
                LineKind::Assignment => stats.assignments += 1,
                LineKind::Passthrough => stats.passthrough += 1,
            }
            out.push(self.rewrite(kind, idx + 1, line)?);
        }

        info!(
            headers = stats.headers,
            assignments = stats.assignments,
            passthrough = stats.passthrough,
            "mirrored {} lines",
            stats.total()
        );

        Ok((out, stats))
    }
}
