//! Source location information for raw YAML nodes.

use serde::{Deserialize, Serialize};

/// Source location information for a raw node.
///
/// Tracks where a node starts in the original document text. Lines and
/// columns are derived from the decoder's character index, so they stay
/// correct for documents containing multi-byte characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Character offset from start of source (0-based)
    pub offset: usize,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based, in characters not bytes)
    pub col: usize,
}

impl SourceInfo {
    /// Create a new SourceInfo with all fields specified.
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        Self { offset, line, col }
    }

    /// Create a SourceInfo for a character offset using a line index.
    pub fn from_offset(lines: &LineIndex, offset: usize) -> Self {
        let (line, col) = lines.position(offset);
        Self { offset, line, col }
    }
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

/// Maps character offsets to line/column positions.
///
/// Built once per document; `position` is a binary search over the
/// character offsets at which each line starts.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in content.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based (line, column) for a character offset.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        (line_idx + 1, offset - self.line_starts[line_idx] + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
