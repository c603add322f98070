use thiserror::Error;

use crate::files::FileError;

/// Recoverable editor errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("line {line} is outside 1..={line_count}")]
    InvalidLineNumber { line: usize, line_count: usize },
    #[error(transparent)]
    File(#[from] FileError),
}

/// A broken structural invariant, reported by [`Document::verify`].
///
/// [`Document::verify`]: super::Document::verify
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("line count {counted} does not match list length {expected}")]
    LineCountMismatch { counted: usize, expected: usize },
    #[error("current line is not in the document")]
    DetachedCurrentLine,
    #[error("first screen line is not in the document")]
    DetachedScreenLine,
    #[error("cursor column {cx} is past line length {len}")]
    CursorOutOfRange { cx: usize, len: usize },
    #[error("screen row {cy} does not place row {row} under scroll offset {scroll_y}")]
    ScreenRowMismatch { cy: usize, row: usize, scroll_y: usize },
    #[error("selection mark at row {row} no longer points at its line")]
    StaleMark { row: usize },
}
