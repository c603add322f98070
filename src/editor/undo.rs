//! Single-level undo log for typed characters.
//!
//! Only character insertions are recorded. Entries hold absolute buffer
//! positions, and the log is shared across documents, so an entry is
//! replayed against whichever document is current. Replay is skipped when
//! the recorded byte is no longer at the recorded position.

use tracing::debug;

use super::document::Document;
use super::selection::Position;
use super::viewport::Viewport;

/// What an [`UndoEntry`] reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoKind {
    InsertChar,
}

/// One recorded edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoEntry {
    pub row: usize,
    pub col: usize,
    pub kind: UndoKind,
    pub byte: u8,
}

/// LIFO stack of edits.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
}

impl UndoLog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record that `byte` was inserted at `at`.
    pub fn push(&mut self, at: Position, byte: u8) {
        self.entries.push(UndoEntry {
            row: at.row,
            col: at.col,
            kind: UndoKind::InsertChar,
            byte,
        });
    }

    /// Pop the newest entry and reverse it on `doc`.
    ///
    /// Returns `true` if the document changed. An empty log, or an entry
    /// whose byte is no longer where it was typed, leaves `doc` untouched;
    /// the stale entry is still consumed.
    pub fn pull(&mut self, doc: &mut Document, vp: &Viewport) -> bool {
        let Some(entry) = self.entries.pop() else {
            return false;
        };
        match entry.kind {
            UndoKind::InsertChar => {
                if doc.byte_at(entry.row, entry.col) != Some(entry.byte) {
                    debug!(row = entry.row, col = entry.col, "undo entry no longer applies");
                    return false;
                }
                doc.jump_to(Position::new(entry.row, entry.col + 1), vp);
                doc.backspace(vp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(80, 10, 4)
    }

    #[test]
    fn test_undo_reverses_typing_in_order() {
        let mut d = Document::from_text("t.txt", "ac");
        let mut log = UndoLog::new();
        d.jump_to(Position::new(0, 1), &vp());
        let at = d.insert_char(b'b', &vp());
        log.push(at, b'b');
        let at = d.insert_char(b'!', &vp());
        log.push(at, b'!');
        assert_eq!(d.text_lines(), vec!["ab!c"]);

        assert!(log.pull(&mut d, &vp()));
        assert_eq!(d.text_lines(), vec!["abc"]);
        assert_eq!(d.cursor(), Position::new(0, 2));
        assert!(log.pull(&mut d, &vp()));
        assert_eq!(d.text_lines(), vec!["ac"]);
        assert!(!log.pull(&mut d, &vp()));
    }

    #[test]
    fn test_undo_after_cursor_moved_away() {
        let mut d = Document::from_text("t.txt", "x\ny\nz");
        let mut log = UndoLog::new();
        let at = d.insert_char(b'-', &vp());
        log.push(at, b'-');
        d.move_file_end(&vp());
        assert!(log.pull(&mut d, &vp()));
        assert_eq!(d.text_lines(), vec!["x", "y", "z"]);
        assert_eq!(d.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_stale_entry_is_skipped() {
        let mut d = Document::from_text("t.txt", "abc");
        let mut log = UndoLog::new();
        log.push(Position::new(5, 0), b'q');
        log.push(Position::new(0, 1), b'q');
        assert!(!log.pull(&mut d, &vp()));
        assert!(!log.pull(&mut d, &vp()));
        assert!(log.is_empty());
        assert_eq!(d.text_lines(), vec!["abc"]);
        assert!(!d.is_modified());
    }
}
