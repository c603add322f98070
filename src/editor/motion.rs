//! Cursor movement.
//!
//! Vertical moves keep the cursor's display column, so moving through a
//! tab-indented line does not make the cursor drift sideways.

use super::coords::{column_to_display, display_to_column};
use super::document::Document;
use super::viewport::{ScrollDirection, Viewport};

/// Direction for single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Document {
    /// Move one step in `direction`.
    pub fn move_cursor(&mut self, direction: Direction, vp: &Viewport) {
        match direction {
            Direction::Up => self.move_vertical(1, ScrollDirection::Up, vp),
            Direction::Down => self.move_vertical(1, ScrollDirection::Down, vp),
            Direction::Left => self.move_left(vp),
            Direction::Right => self.move_right(vp),
        }
    }

    /// Left one byte, wrapping to the end of the previous line.
    pub fn move_left(&mut self, vp: &Viewport) {
        if self.cx > 0 {
            self.cx -= 1;
        } else if self.scroll_lines(1, ScrollDirection::Up, vp) == 1 {
            self.cx = self.current_line().len();
        }
        self.clamp_horizontal(vp);
    }

    /// Right one byte, wrapping to the start of the next line.
    pub fn move_right(&mut self, vp: &Viewport) {
        if self.cx < self.current_line().len() {
            self.cx += 1;
        } else if self.scroll_lines(1, ScrollDirection::Down, vp) == 1 {
            self.cx = 0;
            self.scroll_x = 0;
        }
        self.clamp_horizontal(vp);
    }

    fn move_vertical(&mut self, count: usize, direction: ScrollDirection, vp: &Viewport) {
        let dx = column_to_display(self.current_line().text(), self.cx, vp.tab_width);
        if self.scroll_lines(count, direction, vp) > 0 {
            self.cx = display_to_column(self.current_line().text(), dx, vp.tab_width);
        }
        self.clamp_horizontal(vp);
    }

    /// Up one viewport height.
    pub fn page_up(&mut self, vp: &Viewport) {
        self.move_vertical(vp.height, ScrollDirection::Up, vp);
    }

    /// Down one viewport height.
    pub fn page_down(&mut self, vp: &Viewport) {
        self.move_vertical(vp.height, ScrollDirection::Down, vp);
    }

    /// Start of the next word. Words are separated by spaces; at the end of
    /// a line this wraps like [`move_right`](Self::move_right).
    pub fn move_word_right(&mut self, vp: &Viewport) {
        let text = self.current_line().text();
        if self.cx >= text.len() {
            self.move_right(vp);
            return;
        }
        let mut cx = self.cx;
        while cx < text.len() && text[cx] != b' ' {
            cx += 1;
        }
        while cx < text.len() && text[cx] == b' ' {
            cx += 1;
        }
        self.cx = cx;
        self.clamp_horizontal(vp);
    }

    /// Start of the current or previous word, wrapping at column 0.
    pub fn move_word_left(&mut self, vp: &Viewport) {
        if self.cx == 0 {
            self.move_left(vp);
            return;
        }
        let text = self.current_line().text();
        let mut cx = self.cx.min(text.len());
        while cx > 0 && text[cx - 1] == b' ' {
            cx -= 1;
        }
        while cx > 0 && text[cx - 1] != b' ' {
            cx -= 1;
        }
        self.cx = cx;
        self.clamp_horizontal(vp);
    }

    pub fn move_home(&mut self, vp: &Viewport) {
        self.cx = 0;
        self.scroll_x = 0;
        self.clamp_horizontal(vp);
    }

    pub fn move_end(&mut self, vp: &Viewport) {
        self.cx = self.current_line().len();
        self.clamp_horizontal(vp);
    }

    /// First line, column 0, no scrolling.
    pub fn move_file_home(&mut self, vp: &Viewport) {
        let head = self.lines().head();
        self.current = head;
        self.first_screen = head;
        self.cx = 0;
        self.cy = 0;
        self.scroll_x = 0;
        self.scroll_y = 0;
        self.clamp_horizontal(vp);
    }

    /// End of the last line.
    pub fn move_file_end(&mut self, vp: &Viewport) {
        self.scroll_lines(self.line_count(), ScrollDirection::Down, vp);
        self.move_end(vp);
    }
}
