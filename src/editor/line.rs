//! Line storage.
//!
//! A [`Line`] is a plain byte sequence. Documents keep their lines in a
//! [`LineList`]: a doubly linked list whose nodes live in a slot map, so a
//! [`LineId`] stays valid for as long as the line exists and becomes
//! detectably stale once it is removed.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle to a line inside a [`LineList`].
    pub struct LineId;
}

/// A single line of text, stored as raw bytes without a line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: Vec<u8>,
}

impl Line {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self { text: Vec::new() }
    }

    /// Create a line holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: bytes.to_vec(),
        }
    }

    /// The line's bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte at `col`, if any.
    pub fn byte_at(&self, col: usize) -> Option<u8> {
        self.text.get(col).copied()
    }

    /// Insert `bytes` at `col`, shifting the tail right.
    ///
    /// # Panics
    ///
    /// Panics if `col` is past the end of the line.
    pub fn insert(&mut self, col: usize, bytes: &[u8]) {
        assert!(col <= self.text.len(), "insert column {col} past end of line");
        self.text.splice(col..col, bytes.iter().copied());
    }

    /// Remove up to `count` bytes starting at `col`.
    ///
    /// The count is clamped to what remains of the line.
    pub fn remove(&mut self, col: usize, count: usize) {
        assert!(col <= self.text.len(), "remove column {col} past end of line");
        let end = col.saturating_add(count).min(self.text.len());
        self.text.drain(col..end);
    }

    /// Append `bytes` at the end of the line.
    pub fn append(&mut self, bytes: &[u8]) {
        self.text.extend_from_slice(bytes);
    }

    /// Cut the line at `col`, returning everything from `col` on.
    pub fn split_off(&mut self, col: usize) -> Self {
        assert!(col <= self.text.len(), "split column {col} past end of line");
        Self {
            text: self.text.split_off(col),
        }
    }

    /// Drop everything from `col` on.
    pub fn truncate(&mut self, col: usize) {
        self.text.truncate(col);
    }

    /// Lossy UTF-8 view, for display and messages.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

#[derive(Debug, Clone)]
struct Node {
    line: Line,
    prev: Option<LineId>,
    next: Option<LineId>,
}

/// A non-empty doubly linked list of lines.
///
/// The number of lines is the number of live slots, so it can never drift
/// from the list itself.
#[derive(Debug, Clone)]
pub struct LineList {
    nodes: SlotMap<LineId, Node>,
    head: LineId,
    tail: LineId,
}

impl LineList {
    /// A list holding one empty line.
    pub fn new() -> Self {
        Self::from_lines(std::iter::empty())
    }

    /// Build a list from lines; an empty iterator yields one empty line.
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut head = None;
        let mut tail: Option<LineId> = None;
        for line in lines {
            let id = nodes.insert(Node {
                line,
                prev: tail,
                next: None,
            });
            if let Some(prev) = tail {
                nodes[prev].next = Some(id);
            }
            head.get_or_insert(id);
            tail = Some(id);
        }
        let (head, tail) = match (head, tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => {
                let id = nodes.insert(Node {
                    line: Line::new(),
                    prev: None,
                    next: None,
                });
                (id, id)
            }
        };
        Self { nodes, head, tail }
    }

    pub const fn head(&self) -> LineId {
        self.head
    }

    pub const fn tail(&self) -> LineId {
        self.tail
    }

    /// Number of lines (always at least one).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` refers to a line still in this list.
    pub fn contains(&self, id: LineId) -> bool {
        self.nodes.contains_key(id)
    }

    /// # Panics
    ///
    /// Panics if `id` is not in the list.
    pub fn get(&self, id: LineId) -> &Line {
        &self.nodes[id].line
    }

    /// # Panics
    ///
    /// Panics if `id` is not in the list.
    pub fn get_mut(&mut self, id: LineId) -> &mut Line {
        &mut self.nodes[id].line
    }

    pub fn prev(&self, id: LineId) -> Option<LineId> {
        self.nodes[id].prev
    }

    pub fn next(&self, id: LineId) -> Option<LineId> {
        self.nodes[id].next
    }

    /// Link a new line after `after` and return its handle.
    pub fn insert_after(&mut self, after: LineId, line: Line) -> LineId {
        let next = self.nodes[after].next;
        let id = self.nodes.insert(Node {
            line,
            prev: Some(after),
            next,
        });
        self.nodes[after].next = Some(id);
        match next {
            Some(next) => self.nodes[next].prev = Some(id),
            None => self.tail = id,
        }
        id
    }

    /// Link a new line before `before` and return its handle.
    pub fn insert_before(&mut self, before: LineId, line: Line) -> LineId {
        let prev = self.nodes[before].prev;
        let id = self.nodes.insert(Node {
            line,
            prev,
            next: Some(before),
        });
        self.nodes[before].prev = Some(id);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(id),
            None => self.head = id,
        }
        id
    }

    /// Unlink and return a line.
    ///
    /// # Panics
    ///
    /// Panics when asked to remove the only line; callers replace it instead.
    pub fn remove(&mut self, id: LineId) -> Line {
        assert!(self.len() > 1, "cannot unlink the only line of a list");
        let node = self.nodes.remove(id).expect("line is not in this list");
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => {
                if let Some(next) = node.next {
                    self.head = next;
                }
            }
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => {
                if let Some(prev) = node.prev {
                    self.tail = prev;
                }
            }
        }
        node.line
    }

    /// Zero-based position of `id`, found by walking from the head.
    pub fn index_of(&self, id: LineId) -> Option<usize> {
        self.ids().position(|candidate| candidate == id)
    }

    /// Handle of the line at zero-based `index`.
    pub fn nth(&self, index: usize) -> Option<LineId> {
        self.ids().nth(index)
    }

    /// Handles in document order.
    pub fn ids(&self) -> Ids<'_> {
        self.ids_from(self.head)
    }

    /// Handles in document order, starting at `start`.
    pub fn ids_from(&self, start: LineId) -> Ids<'_> {
        Ids {
            list: self,
            next: Some(start),
        }
    }

    /// Lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.ids().map(|id| self.get(id))
    }
}

impl Default for LineList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over line handles, following `next` links.
pub struct Ids<'a> {
    list: &'a LineList,
    next: Option<LineId>,
}

impl Iterator for Ids<'_> {
    type Item = LineId;

    fn next(&mut self) -> Option<LineId> {
        let id = self.next?;
        self.next = self.list.next(id);
        Some(id)
    }
}
