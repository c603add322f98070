//! Selection mark and extents.
//!
//! A selection is the span between a saved [`Mark`] and the live cursor.
//! [`Extents`] orders the two endpoints so callers never care which one
//! the cursor is at. Both endpoints are inclusive: the byte under `end`
//! belongs to the selection.
//!
//! The mark remembers its line handle, row and column. Whoever inserts or
//! removes lines or bytes must call the matching `adjust_*` method so the
//! mark keeps pointing at the same byte.

use super::line::LineId;

/// A buffer position: zero-based row and byte column.
///
/// Ordering is row-major, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The saved endpoint of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub line: LineId,
    pub row: usize,
    pub col: usize,
}

impl Mark {
    pub const fn new(line: LineId, row: usize, col: usize) -> Self {
        Self { line, row, col }
    }

    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Account for the line at `row` having been removed.
    ///
    /// Returns `None` when the removed line was the marked one, which
    /// clears the selection.
    #[must_use]
    pub fn adjust_for_removed(self, row: usize) -> Option<Self> {
        match self.row.cmp(&row) {
            std::cmp::Ordering::Less => Some(self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self {
                row: self.row - 1,
                ..self
            }),
        }
    }

    /// Account for a new line having been inserted at `row`.
    #[must_use]
    pub fn adjust_for_inserted(self, row: usize) -> Self {
        if self.row >= row {
            Self {
                row: self.row + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Account for the line at `row` being split at `col` into itself and
    /// `new_line` (which now sits at `row + 1`).
    #[must_use]
    pub fn adjust_for_split(self, row: usize, col: usize, new_line: LineId) -> Self {
        if self.row == row && self.col >= col {
            Self {
                line: new_line,
                row: row + 1,
                col: self.col - col,
            }
        } else {
            self.adjust_for_inserted(row + 1)
        }
    }

    /// Account for the line at `row + 1` being appended onto `line` at `row`,
    /// whose length before the merge was `joined_at`.
    #[must_use]
    pub fn adjust_for_merge(self, row: usize, line: LineId, joined_at: usize) -> Self {
        if self.row == row + 1 {
            Self {
                line,
                row,
                col: self.col + joined_at,
            }
        } else if self.row > row + 1 {
            Self {
                row: self.row - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Account for `count` bytes inserted at `col` on line `row`.
    ///
    /// A mark at or after `col` keeps pointing at the same byte.
    #[must_use]
    pub const fn adjust_for_insert(self, row: usize, col: usize, count: usize) -> Self {
        if self.row == row && self.col >= col {
            Self {
                col: self.col + count,
                ..self
            }
        } else {
            self
        }
    }

    /// Account for `count` bytes deleted from `col` on line `row`.
    ///
    /// A mark inside the deleted span moves to its start.
    #[must_use]
    pub const fn adjust_for_delete(self, row: usize, col: usize, count: usize) -> Self {
        if self.row != row || self.col <= col {
            self
        } else if self.col >= col + count {
            Self {
                col: self.col - count,
                ..self
            }
        } else {
            Self { col, ..self }
        }
    }
}

/// Normalised selection span, `start <= end`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub start: Position,
    pub end: Position,
}

impl Extents {
    /// Order two endpoints.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Whether the byte at (`row`, `col`) is selected.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let pos = Position::new(row, col);
        self.start <= pos && pos <= self.end
    }

    /// Selected byte columns on `row`, as a half-open range clipped to
    /// `line_len + 1` so the cell after the last byte can be highlighted.
    pub fn columns_on_row(&self, row: usize, line_len: usize) -> Option<std::ops::Range<usize>> {
        if row < self.start.row || row > self.end.row {
            return None;
        }
        let from = if row == self.start.row { self.start.col } else { 0 };
        let to = if row == self.end.row {
            self.end.col + 1
        } else {
            line_len + 1
        };
        let to = to.min(line_len + 1);
        (from < to).then_some(from..to)
    }

    /// Number of rows touched.
    pub const fn row_span(&self) -> usize {
        self.end.row - self.start.row + 1
    }
}
