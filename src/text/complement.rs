//! The dim-rectangle geometry: converts "focus on range R" into "dim
//! everything except R" as a pair of before/after rectangles.

use super::{Position, Range};

/// The two dimmed sub-ranges complementary to a focused range.
///
/// Either half is omitted when it would be empty: `before` when the focus
/// starts on the first line, `after` when it ends on the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimRanges {
    pub before: Option<Range>,
    pub after: Option<Range>,
}

impl DimRanges {
    /// Collect the present halves, in document order.
    pub fn to_vec(self) -> Vec<Range> {
        [self.before, self.after].into_iter().flatten().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

/// Compute the dimmed complement of `focused` in a document of
/// `line_count` lines.
///
/// `before` runs from the document start through one line above the focus;
/// `after` from one line below the focus through the document end. Under
/// whole-line rendering, `{before, focused, after}` tile the document with
/// no overlap.
pub fn complement(focused: Range, line_count: u32) -> DimRanges {
    let before = if focused.start.line > 0 {
        Some(Range::new(
            Position::new(0, 0),
            Position::new(focused.start.line - 1, focused.start.character),
        ))
    } else {
        None
    };

    let after = if focused.end.line + 1 < line_count {
        Some(Range::new(
            Position::new(focused.end.line + 1, focused.end.character),
            Position::new(line_count, 0),
        ))
    } else {
        None
    };

    DimRanges { before, after }
}
