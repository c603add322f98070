//! Editor session state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{ActivePrompt, Model, PromptKind, STATUS_ROWS};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::Options;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    files: Vec<PathBuf>,
    options: Options,
}

impl App {
    /// Create an editor for the given files. No files means one blank document.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            options: Options::default(),
        }
    }

    /// Use the given options instead of the defaults.
    #[must_use]
    pub const fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}
