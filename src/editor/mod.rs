//! The editing core: documents, cursor and viewport state, selection,
//! clipboard and undo.
//!
//! Nothing in here touches the terminal. Every operation takes the
//! [`Viewport`] it should scroll against, so the same document can be
//! driven headless in tests and benches.

mod clipboard;
mod coords;
mod document;
mod documents;
mod error;
mod line;
mod motion;
mod prompt;
mod selection;
mod undo;
mod viewport;

pub use clipboard::Clipboard;
pub use coords::{byte_width, column_to_display, display_to_column, display_width, expand_tabs};
pub use document::Document;
pub use documents::DocumentSet;
pub use error::{EditorError, InvariantError};
pub use line::{Line, LineId, LineList};
pub use motion::Direction;
pub use prompt::{LinePrompt, PROMPT_MAX_LEN, PromptKey, PromptOutcome};
pub use selection::{Extents, Mark, Position};
pub use undo::{UndoEntry, UndoKind, UndoLog};
pub use viewport::{ScrollDirection, Viewport};

/// Name given to documents created with the new-document command.
pub const NEW_DOCUMENT_NAME: &str = "new.txt";

/// Name of the document opened when no files are given.
pub const BLANK_DOCUMENT_NAME: &str = "blank.txt";
