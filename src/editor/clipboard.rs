//! Process-wide clipboard shared by every open document.

use super::document::Document;
use super::line::Line;
use super::viewport::Viewport;

/// Copied text, one [`Line`] per row.
///
/// A whole-line copy holds the line followed by an empty line and pastes
/// above the current line rather than at the cursor.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    lines: Vec<Line>,
    whole_line: bool,
}

impl Clipboard {
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            whole_line: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub const fn is_whole_line(&self) -> bool {
        self.whole_line
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.whole_line = false;
    }

    /// Copy the current line.
    pub fn copy_line(&mut self, doc: &Document) {
        self.lines = vec![doc.current_line().clone(), Line::new()];
        self.whole_line = true;
    }

    /// Copy the selection. Returns `false` (leaving the clipboard alone)
    /// when nothing is selected.
    pub fn copy_selection(&mut self, doc: &Document) -> bool {
        let Some(lines) = doc.selected_lines() else {
            return false;
        };
        self.lines = lines;
        self.whole_line = false;
        true
    }

    /// Copy the current line, then remove it.
    pub fn cut_line(&mut self, doc: &mut Document, vp: &Viewport) {
        self.copy_line(doc);
        doc.cut_current_line(vp);
    }

    /// Copy the selection, then delete it.
    pub fn cut_selection(&mut self, doc: &mut Document, vp: &Viewport) -> bool {
        self.copy_selection(doc) && doc.delete_selection(vp)
    }

    /// Insert the clipboard at the cursor.
    ///
    /// The first line goes in at the cursor; each further line starts with
    /// a line break. The cursor ends up after the pasted text. Returns
    /// `false` when the clipboard is empty.
    pub fn paste(&self, doc: &mut Document, vp: &Viewport) -> bool {
        let Some((first, rest)) = self.lines.split_first() else {
            return false;
        };
        if self.whole_line {
            doc.move_home(vp);
        }
        doc.insert_text(first.text(), vp);
        for line in rest {
            doc.enter(vp);
            doc.insert_text(line.text(), vp);
        }
        true
    }
}
