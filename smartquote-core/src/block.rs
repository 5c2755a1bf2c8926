//! Block-level protection
//!
//! Whole lines inside leading frontmatter or a fenced code block are never
//! quote-converted. Delimiter lines belong to their block. A block without a
//! closing delimiter protects through the end of the document.

use serde::Serialize;

const FRONTMATTER_DELIMITER: &str = "---";
const CODE_FENCE: &str = "```";

/// Kind of protected line block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Frontmatter,
    CodeBlock,
}

/// Inclusive line interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtectedRange {
    pub start: usize,
    /// Closing delimiter line, `None` when the block runs to end of document
    pub end: Option<usize>,
    pub kind: BlockKind,
}

impl ProtectedRange {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && self.end.map_or(true, |end| index <= end)
    }

    pub fn is_terminated(&self) -> bool {
        self.end.is_some()
    }
}

/// Protected line ranges of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedLines {
    ranges: Vec<ProtectedRange>,
}

impl ProtectedLines {
    /// Scan `lines` for frontmatter and fenced code blocks
    pub fn classify<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut ranges = Vec::new();
        let mut body_start = 0;

        if lines
            .first()
            .is_some_and(|l| l.as_ref().trim() == FRONTMATTER_DELIMITER)
        {
            let end = lines
                .iter()
                .skip(1)
                .position(|l| l.as_ref().trim() == FRONTMATTER_DELIMITER)
                .map(|offset| offset + 1);

            ranges.push(ProtectedRange {
                start: 0,
                end,
                kind: BlockKind::Frontmatter,
            });

            match end {
                Some(end) => body_start = end + 1,
                None => return Self { ranges },
            }
        }

        let mut open_fence: Option<usize> = None;
        for (index, line) in lines.iter().enumerate().skip(body_start) {
            if !line.as_ref().trim().starts_with(CODE_FENCE) {
                continue;
            }

            match open_fence.take() {
                Some(start) => ranges.push(ProtectedRange {
                    start,
                    end: Some(index),
                    kind: BlockKind::CodeBlock,
                }),
                None => open_fence = Some(index),
            }
        }

        if let Some(start) = open_fence {
            ranges.push(ProtectedRange {
                start,
                end: None,
                kind: BlockKind::CodeBlock,
            });
        }

        Self { ranges }
    }

    pub fn is_protected(&self, index: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(index))
    }

    pub fn ranges(&self) -> &[ProtectedRange] {
        &self.ranges
    }

    /// Number of protected lines in a document of `total_lines` lines
    pub fn count(&self, total_lines: usize) -> usize {
        (0..total_lines).filter(|&i| self.is_protected(i)).count()
    }
}
