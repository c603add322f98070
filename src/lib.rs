// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorError)
    clippy::module_name_repetitions
)]

//! # Quill
//!
//! A small terminal line editor.
//!
//! Quill edits plain byte-oriented text files with:
//! - Tab-aware cursor movement and horizontal scrolling
//! - Mark-based selections, a shared clipboard and single-character undo
//! - Several open documents at once
//! - Optional line numbers
//!
//! ## Architecture
//!
//! Quill uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state
//! - **Message**: Events and actions
//! - **Update**: State transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main loop, session state and key bindings
//! - [`editor`]: Documents, cursor and viewport logic, clipboard, undo
//! - [`files`]: Reading and writing line files
//! - [`config`]: Editor options and config files
//! - [`ui`]: Terminal rendering

pub mod app;
pub mod config;
pub mod editor;
pub mod files;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::config::Options;
    pub use crate::editor::{Document, DocumentSet, Position, Viewport};
}
