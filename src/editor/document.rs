//! The document model.
//!
//! A [`Document`] owns its lines plus everything needed to place a cursor
//! over them: the current line, the first line on screen, the cursor's
//! buffer column and screen row, and the scroll offsets. The absolute row
//! of the cursor is always `scroll_y + cy`.
//!
//! Line primitives (`split_line_at`, `merge_with_next`, `insert_bytes`,
//! `delete_range`, `remove_line`) only touch the line list and the
//! cursor/screen anchors. Keeping the selection mark in step is done by the
//! editing operations built on top of them, right where they call the
//! primitive.

use std::path::{Path, PathBuf};

use tracing::info;

use super::error::InvariantError;
use super::line::{Line, LineId, LineList};
use super::selection::{Extents, Mark, Position};
use super::viewport::{ScrollDirection, Viewport};
use crate::files::{self, FileError};

/// An open file: its lines, cursor and viewport anchors.
#[derive(Debug, Clone)]
pub struct Document {
    lines: LineList,
    pub(super) current: LineId,
    pub(super) first_screen: LineId,
    pub(super) cx: usize,
    pub(super) cy: usize,
    pub(super) scroll_x: usize,
    pub(super) scroll_y: usize,
    pub(super) left_margin: usize,
    filename: PathBuf,
    modified: bool,
    pub(super) mark: Option<Mark>,
}

impl Document {
    /// An empty, unmodified document with one empty line.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self::from_lines(filename, Vec::new())
    }

    /// A document over the given lines (none means one empty line).
    pub fn from_lines(filename: impl Into<PathBuf>, lines: Vec<Line>) -> Self {
        let lines = LineList::from_lines(lines);
        let head = lines.head();
        Self {
            lines,
            current: head,
            first_screen: head,
            cx: 0,
            cy: 0,
            scroll_x: 0,
            scroll_y: 0,
            left_margin: 0,
            filename: filename.into(),
            modified: false,
            mark: None,
        }
    }

    /// A document from `\n`-separated text.
    pub fn from_text(filename: impl Into<PathBuf>, text: &str) -> Self {
        Self::from_lines(filename, text.split('\n').map(Line::from).collect())
    }

    /// Load `path`, or start a new document with that name if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: &Path) -> Result<Self, FileError> {
        match files::read_lines(path)? {
            Some(lines) => {
                info!(path = %path.display(), lines = lines.len(), "opened document");
                Ok(Self::from_lines(path, lines))
            }
            None => {
                info!(path = %path.display(), "file not found, starting new document");
                Ok(Self::new(path))
            }
        }
    }

    /// Write every line to the document's file.
    ///
    /// On failure the document stays modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&mut self) -> Result<(), FileError> {
        files::write_lines(&self.filename, self.lines.iter().map(Line::text))?;
        self.modified = false;
        info!(path = %self.filename.display(), lines = self.line_count(), "saved document");
        Ok(())
    }

    // --- Queries ---

    pub const fn lines(&self) -> &LineList {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn current_line(&self) -> &Line {
        self.lines.get(self.current)
    }

    pub const fn current_id(&self) -> LineId {
        self.current
    }

    pub const fn first_screen_id(&self) -> LineId {
        self.first_screen
    }

    /// Buffer column of the cursor.
    pub const fn cx(&self) -> usize {
        self.cx
    }

    /// Screen row of the cursor within the viewport.
    pub const fn cy(&self) -> usize {
        self.cy
    }

    /// Absolute row of the cursor.
    pub const fn row(&self) -> usize {
        self.scroll_y + self.cy
    }

    pub const fn cursor(&self) -> Position {
        Position::new(self.row(), self.cx)
    }

    pub const fn scroll_x(&self) -> usize {
        self.scroll_x
    }

    pub const fn scroll_y(&self) -> usize {
        self.scroll_y
    }

    /// Columns reserved for line numbers.
    pub const fn left_margin(&self) -> usize {
        self.left_margin
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = filename.into();
    }

    /// File name without directories, for the status line.
    pub fn display_name(&self) -> String {
        self.filename.file_name().map_or_else(
            || self.filename.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub const fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Byte at an absolute position, if there is one.
    pub fn byte_at(&self, row: usize, col: usize) -> Option<u8> {
        let id = self.lines.nth(row)?;
        self.lines.get(id).byte_at(col)
    }

    /// Line contents in order, lossily decoded. Mostly useful in tests.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::to_string_lossy).collect()
    }

    // --- Line primitives ---

    /// Move the current line's bytes from `cx` on into a new line linked
    /// right after it. Returns the new line.
    pub fn split_line_at(&mut self, cx: usize) -> LineId {
        let tail = self.lines.get_mut(self.current).split_off(cx);
        self.lines.insert_after(self.current, tail)
    }

    /// Append the next line onto the current one and unlink it.
    ///
    /// Returns the current line's length before the join, or `None` on the
    /// last line.
    pub fn merge_with_next(&mut self) -> Option<usize> {
        let next = self.lines.next(self.current)?;
        let joined_at = self.current_line().len();
        let tail = self.lines.remove(next);
        self.lines.get_mut(self.current).append(tail.text());
        Some(joined_at)
    }

    /// Insert bytes into the current line at `cx`.
    pub fn insert_bytes(&mut self, cx: usize, bytes: &[u8]) {
        self.lines.get_mut(self.current).insert(cx, bytes);
    }

    /// Delete up to `count` bytes of the current line from `cx`.
    pub fn delete_range(&mut self, cx: usize, count: usize) {
        self.lines.get_mut(self.current).remove(cx, count);
    }

    /// Unlink `id` and return the row it occupied.
    ///
    /// If the current or first screen line is the one removed, it moves to
    /// the following line (or the preceding one at the end of the document).
    /// Removing the only line replaces it with a fresh empty line. The
    /// selection mark is not touched; callers pass the returned row to
    /// [`Mark::adjust_for_removed`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    pub fn remove_line(&mut self, id: LineId) -> usize {
        let row = self
            .lines
            .index_of(id)
            .expect("removed line must belong to the document");

        if self.lines.len() == 1 {
            let fresh = self.lines.insert_after(id, Line::new());
            self.lines.remove(id);
            self.current = fresh;
            self.first_screen = fresh;
            self.cx = 0;
            self.cy = 0;
            self.scroll_x = 0;
            self.scroll_y = 0;
            return row;
        }

        let next = self.lines.next(id);
        let prev = self.lines.prev(id);
        let relocate = |target: LineId, target_row: usize| -> (LineId, usize) {
            if target == id {
                match (next, prev) {
                    (Some(next), _) => (next, target_row),
                    (None, Some(prev)) => (prev, target_row - 1),
                    (None, None) => unreachable!("document has more than one line"),
                }
            } else if target_row > row {
                (target, target_row - 1)
            } else {
                (target, target_row)
            }
        };
        let (current, current_row) = relocate(self.current, self.row());
        let (first_screen, screen_row) = relocate(self.first_screen, self.scroll_y);

        self.lines.remove(id);
        self.current = current;
        self.first_screen = first_screen;
        self.scroll_y = screen_row;
        self.cy = current_row - screen_row;
        self.cx = self.cx.min(self.current_line().len());
        row
    }

    // --- Editing ---

    /// Insert one byte at the cursor and advance past it.
    ///
    /// Returns where the byte went, for the undo log.
    pub fn insert_char(&mut self, byte: u8, vp: &Viewport) -> Position {
        let at = self.cursor();
        self.insert_bytes(self.cx, &[byte]);
        self.mark = self.mark.map(|mark| mark.adjust_for_insert(at.row, at.col, 1));
        self.cx += 1;
        self.modified = true;
        self.clamp_horizontal(vp);
        at
    }

    /// Insert bytes at the cursor and advance past them.
    pub fn insert_text(&mut self, bytes: &[u8], vp: &Viewport) {
        if bytes.is_empty() {
            return;
        }
        self.insert_bytes(self.cx, bytes);
        let row = self.row();
        self.mark = self
            .mark
            .map(|mark| mark.adjust_for_insert(row, self.cx, bytes.len()));
        self.cx += bytes.len();
        self.modified = true;
        self.clamp_horizontal(vp);
    }

    /// Split the current line at the cursor and move to the start of the new line.
    pub fn enter(&mut self, vp: &Viewport) {
        let row = self.row();
        let new_line = self.split_line_at(self.cx);
        self.mark = self
            .mark
            .map(|mark| mark.adjust_for_split(row, self.cx, new_line));
        self.scroll_lines(1, ScrollDirection::Down, vp);
        self.cx = 0;
        self.scroll_x = 0;
        self.modified = true;
        self.clamp_horizontal(vp);
    }

    /// Delete the byte before the cursor, or join with the previous line at
    /// column 0. Returns `false` at the very start of the document.
    pub fn backspace(&mut self, vp: &Viewport) -> bool {
        if self.cx > 0 {
            self.cx -= 1;
            self.delete_range(self.cx, 1);
            let row = self.row();
            self.mark = self.mark.map(|mark| mark.adjust_for_delete(row, self.cx, 1));
        } else if self.lines.prev(self.current).is_some() {
            self.scroll_lines(1, ScrollDirection::Up, vp);
            self.cx = self.current_line().len();
            self.join_next();
        } else {
            return false;
        }
        self.modified = true;
        self.clamp_horizontal(vp);
        true
    }

    /// Delete the byte under the cursor, or join the next line at end of
    /// line. Returns `false` at the very end of the document.
    pub fn delete_char(&mut self, vp: &Viewport) -> bool {
        if self.cx < self.current_line().len() {
            self.delete_range(self.cx, 1);
            let row = self.row();
            self.mark = self.mark.map(|mark| mark.adjust_for_delete(row, self.cx, 1));
        } else if !self.join_next() {
            return false;
        }
        self.modified = true;
        self.clamp_horizontal(vp);
        true
    }

    fn join_next(&mut self) -> bool {
        let row = self.row();
        let Some(joined_at) = self.merge_with_next() else {
            return false;
        };
        let current = self.current;
        self.mark = self
            .mark
            .map(|mark| mark.adjust_for_merge(row, current, joined_at));
        true
    }

    /// Remove the current line entirely, leaving the cursor at the start of
    /// whichever line takes its place.
    pub fn cut_current_line(&mut self, vp: &Viewport) {
        let row = self.remove_line(self.current);
        self.mark = self.mark.and_then(|mark| mark.adjust_for_removed(row));
        self.cx = 0;
        self.scroll_x = 0;
        self.modified = true;
        self.clamp_horizontal(vp);
    }

    // --- Selection ---

    /// Drop a mark at the cursor.
    pub fn set_mark(&mut self) {
        self.mark = Some(Mark::new(self.current, self.row(), self.cx));
    }

    pub const fn clear_mark(&mut self) {
        self.mark = None;
    }

    /// Ordered selection endpoints, if a mark is set.
    ///
    /// The mark's column is clamped to its line, which may have shrunk
    /// since the mark was dropped.
    pub fn selection_extents(&self) -> Option<Extents> {
        let mark = self.mark?;
        let len = self.lines.get(mark.line).len();
        let mark_pos = Position::new(mark.row, mark.col.min(len));
        Some(Extents::new(mark_pos, self.cursor()))
    }

    /// Copies of the selected bytes, one line per row spanned.
    pub fn selected_lines(&self) -> Option<Vec<Line>> {
        let ext = self.selection_extents()?;
        let first = self.lines.nth(ext.start.row)?;
        let lines = self
            .lines
            .ids_from(first)
            .take(ext.row_span())
            .enumerate()
            .map(|(offset, id)| {
                let text = self.lines.get(id).text();
                let row = ext.start.row + offset;
                let from = if row == ext.start.row {
                    ext.start.col.min(text.len())
                } else {
                    0
                };
                let to = if row == ext.end.row {
                    (ext.end.col + 1).min(text.len())
                } else {
                    text.len()
                };
                Line::from_bytes(text.get(from..to).unwrap_or_default())
            })
            .collect();
        Some(lines)
    }

    /// Delete the selected span and put the cursor at its start.
    ///
    /// Returns `false` when there is no selection.
    pub fn delete_selection(&mut self, vp: &Viewport) -> bool {
        let Some(ext) = self.selection_extents() else {
            return false;
        };
        self.mark = None;
        self.jump_to(ext.start, vp);
        let start_line = self.current;

        if ext.start.row == ext.end.row {
            let count = ext.end.col + 1 - ext.start.col;
            let available = self.current_line().len() - ext.start.col;
            self.delete_range(ext.start.col, count.min(available));
        } else {
            for _ in ext.start.row + 1..ext.end.row {
                let interior = self
                    .lines
                    .next(start_line)
                    .expect("selection rows lie inside the document");
                self.remove_line(interior);
            }
            let end_line = self
                .lines
                .next(start_line)
                .expect("selection end row lies inside the document");
            let end_text = self.lines.get(end_line).text();
            let from = (ext.end.col + 1).min(end_text.len());
            let remainder = end_text[from..].to_vec();
            let start = self.lines.get_mut(start_line);
            start.truncate(ext.start.col);
            start.append(&remainder);
            self.remove_line(end_line);
        }

        self.cx = ext.start.col;
        self.modified = true;
        self.clamp_horizontal(vp);
        true
    }

    // --- Search ---

    /// Move the cursor to the next occurrence of `needle` after the cursor.
    ///
    /// The search runs forward to the end of the document without wrapping.
    pub fn find(&mut self, needle: &[u8], vp: &Viewport) -> bool {
        if needle.is_empty() {
            return false;
        }
        let start_row = self.row();
        let hit = self
            .lines
            .ids_from(self.current)
            .enumerate()
            .find_map(|(offset, id)| {
                let text = self.lines.get(id).text();
                let from = if offset == 0 { self.cx + 1 } else { 0 };
                let haystack = text.get(from..)?;
                haystack
                    .windows(needle.len())
                    .position(|window| window == needle)
                    .map(|col| Position::new(start_row + offset, from + col))
            });
        match hit {
            Some(pos) => {
                self.jump_to(pos, vp);
                true
            }
            None => false,
        }
    }

    // --- Consistency ---

    /// Check the structural invariants that every operation must preserve.
    ///
    /// # Errors
    ///
    /// Returns the first invariant found broken.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let counted = self.lines.ids().count();
        if counted != self.lines.len() {
            return Err(InvariantError::LineCountMismatch {
                counted,
                expected: self.lines.len(),
            });
        }
        let Some(row) = self.lines.index_of(self.current) else {
            return Err(InvariantError::DetachedCurrentLine);
        };
        let Some(screen_row) = self.lines.index_of(self.first_screen) else {
            return Err(InvariantError::DetachedScreenLine);
        };
        if screen_row != self.scroll_y || row != self.scroll_y + self.cy {
            return Err(InvariantError::ScreenRowMismatch {
                cy: self.cy,
                row,
                scroll_y: self.scroll_y,
            });
        }
        let len = self.current_line().len();
        if self.cx > len {
            return Err(InvariantError::CursorOutOfRange { cx: self.cx, len });
        }
        if let Some(mark) = self.mark
            && self.lines.index_of(mark.line) != Some(mark.row)
        {
            return Err(InvariantError::StaleMark { row: mark.row });
        }
        Ok(())
    }
}
