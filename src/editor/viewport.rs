//! Viewport geometry and the scrolling rules that keep the cursor inside it.
//!
//! The document stores its own scroll offsets; a [`Viewport`] only carries
//! the dimensions they are measured against. Every operation here leaves
//! `scroll_y + cy` equal to the absolute row of the current line.

use super::coords::{column_to_display, display_width};
use super::document::Document;
use super::error::EditorError;
use super::selection::Position;

/// Direction for [`Document::scroll_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Size of the text area and how to lay text out in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Columns, including the line number margin.
    pub width: usize,
    /// Text rows.
    pub height: usize,
    pub tab_width: usize,
    pub show_line_numbers: bool,
}

impl Viewport {
    /// # Panics
    ///
    /// Panics if `tab_width` is zero.
    pub fn new(width: usize, height: usize, tab_width: usize) -> Self {
        assert!(tab_width > 0, "tab width must be at least 1");
        Self {
            width,
            height: height.max(1),
            tab_width,
            show_line_numbers: false,
        }
    }

    #[must_use]
    pub const fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Update the dimensions after a terminal resize.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height.max(1);
    }

    /// Columns left for text once `left_margin` is taken.
    pub fn text_width(&self, left_margin: usize) -> usize {
        self.width.saturating_sub(left_margin).max(1)
    }

    /// Line number margin for a document of `line_count` lines: the digits
    /// of the largest line number plus one separating column.
    pub const fn margin_for(&self, line_count: usize) -> usize {
        if self.show_line_numbers {
            let digits = if line_count == 0 { 1 } else { line_count.ilog10() as usize + 1 };
            digits + 1
        } else {
            0
        }
    }
}

impl Document {
    /// Pull `cx` back onto the line and scroll horizontally so the cursor's
    /// display column is visible.
    ///
    /// Lines that fit entirely are never scrolled. Calling this twice has
    /// the same effect as calling it once.
    pub fn clamp_horizontal(&mut self, vp: &Viewport) {
        self.left_margin = vp.margin_for(self.line_count());
        let len = self.current_line().len();
        self.cx = self.cx.min(len);

        let text = self.current_line().text();
        let visible = vp.text_width(self.left_margin);
        let dx = column_to_display(text, self.cx, vp.tab_width);
        if display_width(text, vp.tab_width) < visible {
            self.scroll_x = 0;
        } else if dx < self.scroll_x {
            self.scroll_x = dx;
        } else if dx - self.scroll_x >= visible {
            self.scroll_x = dx + 1 - visible;
        }
    }

    /// Move the current line by up to `count` lines, scrolling the first
    /// screen line once the cursor is pinned at an edge of the viewport.
    ///
    /// Stops at either end of the document. Returns how many lines the
    /// cursor moved. `cx` is left alone.
    pub fn scroll_lines(&mut self, count: usize, direction: ScrollDirection, vp: &Viewport) -> usize {
        let mut moved = 0;
        while moved < count {
            match direction {
                ScrollDirection::Down => {
                    let Some(next) = self.lines().next(self.current) else {
                        break;
                    };
                    if self.cy + 1 < vp.height {
                        self.cy += 1;
                    } else if let Some(screen) = self.lines().next(self.first_screen) {
                        self.first_screen = screen;
                        self.scroll_y += 1;
                    }
                    self.current = next;
                }
                ScrollDirection::Up => {
                    let Some(prev) = self.lines().prev(self.current) else {
                        break;
                    };
                    if self.cy > 0 {
                        self.cy -= 1;
                    } else if let Some(screen) = self.lines().prev(self.first_screen) {
                        self.first_screen = screen;
                        self.scroll_y -= 1;
                    }
                    self.current = prev;
                }
            }
            moved += 1;
        }
        moved
    }

    /// Jump to 1-based line `line`.
    ///
    /// Goes to the top of the file and moves down `line - 1` lines, so a
    /// distant target ends up on the bottom row of the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidLineNumber`] if `line` is 0 or past
    /// the last line; the cursor does not move.
    pub fn goto_line(&mut self, line: usize, vp: &Viewport) -> Result<(), EditorError> {
        let line_count = self.line_count();
        if line == 0 || line > line_count {
            return Err(EditorError::InvalidLineNumber { line, line_count });
        }
        self.move_file_home(vp);
        self.scroll_lines(line - 1, ScrollDirection::Down, vp);
        self.clamp_horizontal(vp);
        Ok(())
    }

    /// Put the cursor at `pos`, scrolling only if the row is off screen.
    ///
    /// The row is clamped to the document and the column to its line.
    pub fn jump_to(&mut self, pos: Position, vp: &Viewport) {
        let row = pos.row.min(self.line_count() - 1);
        let Some(target) = self.lines().nth(row) else {
            return;
        };

        if row < self.scroll_y {
            self.first_screen = target;
            self.scroll_y = row;
        } else if row >= self.scroll_y + vp.height {
            let top = row + 1 - vp.height;
            if let Some(screen) = self.lines().nth(top) {
                self.first_screen = screen;
                self.scroll_y = top;
            }
        }
        self.current = target;
        self.cy = row - self.scroll_y;
        self.cx = pos.col;
        self.clamp_horizontal(vp);
    }

    /// Re-pin the cursor after the viewport changed size.
    pub fn fit_to_viewport(&mut self, vp: &Viewport) {
        if self.cy >= vp.height {
            let excess = self.cy + 1 - vp.height;
            for _ in 0..excess {
                if let Some(screen) = self.lines().next(self.first_screen) {
                    self.first_screen = screen;
                    self.scroll_y += 1;
                    self.cy -= 1;
                }
            }
        }
        self.clamp_horizontal(vp);
    }

    /// Cursor location on screen as (column, row), counting the margin.
    pub fn cursor_screen_position(&self, vp: &Viewport) -> (usize, usize) {
        let dx = column_to_display(self.current_line().text(), self.cx, vp.tab_width);
        let col = self.left_margin + dx.saturating_sub(self.scroll_x);
        (col.min(vp.width.saturating_sub(1)), self.cy)
    }
}
