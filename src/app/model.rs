use tracing::info;

use crate::app::Message;
use crate::config::Options;
use crate::editor::{Clipboard, Document, DocumentSet, LinePrompt, UndoLog, Viewport};

/// Rows below the text area: the status bar and the prompt line.
pub const STATUS_ROWS: u16 = 2;

/// What a line prompt's answer will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// File name to save the current document under
    SaveAs,
    /// File name to save under before closing; empty closes without saving
    SaveBeforeClose,
    /// File to open
    Open,
    /// Text to search for
    Find,
    /// 1-based line number
    GotoLine,
    /// `set <option> <value>` or `goto <n>`
    Command,
}

impl PromptKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaveAs => "Save as: ",
            Self::SaveBeforeClose => "Save changes to: ",
            Self::Open => "Open: ",
            Self::Find => "Find: ",
            Self::GotoLine => "Go to line: ",
            Self::Command => "Command: ",
        }
    }
}

/// A prompt waiting for input on the bottom line.
#[derive(Debug, Clone)]
pub struct ActivePrompt {
    pub kind: PromptKind,
    pub line: LinePrompt,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    redraws_left: u32,
}

/// Editor session state.
///
/// Everything the editor knows lives here: the open documents, the shared
/// clipboard and undo log, the options and the screen geometry.
pub struct Model {
    pub documents: DocumentSet,
    pub clipboard: Clipboard,
    pub undo: UndoLog,
    pub options: Options,
    pub viewport: Viewport,
    pub prompt: Option<ActivePrompt>,
    /// Needle of the last search, for find-next
    pub last_search: Option<Vec<u8>>,
    message: Option<StatusMessage>,
    /// Set after a first Ctrl+Q with unsaved changes; a second one quits
    pub quit_confirmed: bool,
    pub should_quit: bool,
    follow_up: Option<Message>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("documents", &self.documents.len())
            .field("current", &self.documents.current().filename())
            .field("viewport", &self.viewport)
            .field("prompt", &self.prompt.as_ref().map(|p| p.kind))
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a session over `documents` for a terminal of `terminal_size`.
    pub fn new(documents: DocumentSet, options: Options, terminal_size: (u16, u16)) -> Self {
        let viewport = Viewport::new(
            usize::from(terminal_size.0),
            usize::from(terminal_size.1.saturating_sub(STATUS_ROWS)),
            options.tabsize,
        )
        .with_line_numbers(options.show_linenumbers);
        let mut model = Self {
            documents,
            clipboard: Clipboard::new(),
            undo: UndoLog::new(),
            options,
            viewport,
            prompt: None,
            last_search: None,
            message: None,
            quit_confirmed: false,
            should_quit: false,
            follow_up: None,
        };
        model.fit_current();
        model
    }

    pub fn current_document(&self) -> &Document {
        self.documents.current()
    }

    /// Re-pin the current document's cursor against the viewport.
    pub(super) fn fit_current(&mut self) {
        let vp = self.viewport;
        self.documents.current_mut().fit_to_viewport(&vp);
    }

    /// Push option changes into the viewport.
    pub(super) fn apply_options(&mut self) {
        self.viewport.tab_width = self.options.tabsize;
        self.viewport.show_line_numbers = self.options.show_linenumbers;
        self.fit_current();
    }

    /// Show `text` on the status line for the next `message_cooldown` redraws.
    pub(super) fn show_message(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            redraws_left: self.options.message_cooldown,
        });
    }

    /// Count down one redraw; returns `true` when a message just expired.
    pub fn tick_message(&mut self) -> bool {
        let Some(message) = self.message.as_mut() else {
            return false;
        };
        message.redraws_left = message.redraws_left.saturating_sub(1);
        if message.redraws_left == 0 {
            self.message = None;
            return true;
        }
        false
    }

    pub fn active_message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|message| message.redraws_left > 0)
            .map(|message| message.text.as_str())
    }

    pub(super) fn open_prompt(&mut self, kind: PromptKind, initial: &[u8]) {
        self.prompt = Some(ActivePrompt {
            kind,
            line: LinePrompt::new(kind.label(), initial),
        });
    }

    /// Queue a message to dispatch after the current one.
    pub(super) fn queue(&mut self, msg: Message) {
        self.follow_up = Some(msg);
    }

    pub(super) const fn take_follow_up(&mut self) -> Option<Message> {
        self.follow_up.take()
    }

    /// Close the current document, or end the session if it is the last.
    pub(super) fn close_current_document(&mut self) {
        match self.documents.close_current() {
            Some(closed) => {
                info!(path = %closed.filename().display(), "closed document");
                self.fit_current();
            }
            None => {
                info!("closed last document");
                self.should_quit = true;
            }
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DocumentSet::default(), Options::default(), (80, 24))
    }
}
