//! The set of open documents.

use super::document::Document;

/// Open documents in order, with one of them current.
///
/// The set is never empty. Closing the last document is refused and left
/// to the caller, which ends the session instead.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    documents: Vec<Document>,
    current: usize,
}

impl DocumentSet {
    pub fn new(first: Document) -> Self {
        Self {
            documents: vec![first],
            current: 0,
        }
    }

    /// Build a set from several documents; the first becomes current.
    ///
    /// Returns `None` if `documents` is empty.
    pub fn from_documents(documents: Vec<Document>) -> Option<Self> {
        (!documents.is_empty()).then_some(Self {
            documents,
            current: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Zero-based index of the current document.
    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Document {
        &self.documents[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Document {
        &mut self.documents[self.current]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Whether any open document has unsaved changes.
    pub fn any_modified(&self) -> bool {
        self.documents.iter().any(Document::is_modified)
    }

    /// Insert `document` after the current one and make it current.
    pub fn add(&mut self, document: Document) {
        self.current += 1;
        self.documents.insert(self.current, document);
    }

    /// Close the current document and make its predecessor current.
    ///
    /// Returns the closed document, or `None` if it was the only one.
    pub fn close_current(&mut self) -> Option<Document> {
        if self.documents.len() == 1 {
            return None;
        }
        let closed = self.documents.remove(self.current);
        self.current = self.current.saturating_sub(1);
        Some(closed)
    }

    /// Make the next document current, wrapping to the first.
    pub fn cycle_next(&mut self) {
        self.current = (self.current + 1) % self.documents.len();
    }
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::new(Document::new(super::NEW_DOCUMENT_NAME))
    }
}
