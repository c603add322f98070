use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::app::{Model, STATUS_ROWS};
use crate::app::model::{ActivePrompt, PromptKind};
use crate::config::split_assignment;
use crate::editor::{Direction, Document, NEW_DOCUMENT_NAME, PromptKey, PromptOutcome};

/// All possible events and actions in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Movement
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Move to the previous word start (Ctrl+Left)
    MoveWordLeft,
    /// Move to the next word start (Ctrl+Right)
    MoveWordRight,
    /// Move up one screen
    PageUp,
    /// Move down one screen
    PageDown,
    /// Move to the start of the line (Home)
    MoveHome,
    /// Move to the end of the line (End)
    MoveEnd,
    /// Move to the start of the document (Ctrl+Home)
    MoveToStart,
    /// Move to the end of the document (Ctrl+End)
    MoveToEnd,
    /// Go to a 1-based line
    GotoLine(usize),

    // Editing
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Split the line at the cursor (Enter)
    SplitLine,
    /// Delete before the cursor (Backspace)
    DeleteBack,
    /// Delete at the cursor (Delete)
    DeleteForward,
    /// Undo the last typed character
    Undo,

    // Selection and clipboard
    /// Set or clear the selection mark
    ToggleMark,
    /// Copy the selection, or the current line
    Copy,
    /// Cut the selection, or the current line
    Cut,
    /// Paste the clipboard
    Paste,

    // Search
    /// Search forward for a byte string
    Find(Vec<u8>),
    /// Repeat the last search
    FindNext,

    // Prompt
    /// Open a line prompt
    StartPrompt(PromptKind),
    /// Edit the active prompt
    PromptInput(PromptKey),
    /// Run a command prompt line
    RunCommand(String),

    // Documents
    /// Add an empty document
    NewDocument,
    /// Open a file as a new document
    OpenFile(PathBuf),
    /// Save the current document under `path`, then optionally close it
    SaveAs { path: PathBuf, then_close: bool },
    /// Close the current document, asking to save if modified
    CloseDocument,
    /// Switch to the next document
    NextDocument,

    // Display
    /// Show or hide line numbers
    ToggleLineNumbers,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit, asking for confirmation once if anything is unsaved
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// File I/O is left to the side effect handler; everything else happens
/// here.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset quit confirmation on any other action.
    if !matches!(msg, Message::Quit) {
        model.quit_confirmed = false;
    }

    let vp = model.viewport;
    match msg {
        // Movement
        Message::MoveCursor(direction) => model.documents.current_mut().move_cursor(direction, &vp),
        Message::MoveWordLeft => model.documents.current_mut().move_word_left(&vp),
        Message::MoveWordRight => model.documents.current_mut().move_word_right(&vp),
        Message::PageUp => model.documents.current_mut().page_up(&vp),
        Message::PageDown => model.documents.current_mut().page_down(&vp),
        Message::MoveHome => model.documents.current_mut().move_home(&vp),
        Message::MoveEnd => model.documents.current_mut().move_end(&vp),
        Message::MoveToStart => model.documents.current_mut().move_file_home(&vp),
        Message::MoveToEnd => model.documents.current_mut().move_file_end(&vp),
        Message::GotoLine(line) => {
            if let Err(err) = model.documents.current_mut().goto_line(line, &vp) {
                debug!(%err, "ignoring goto");
            }
        }

        // Editing
        Message::InsertChar(byte) => {
            let at = model.documents.current_mut().insert_char(byte, &vp);
            model.undo.push(at, byte);
        }
        Message::SplitLine => model.documents.current_mut().enter(&vp),
        Message::DeleteBack => {
            model.documents.current_mut().backspace(&vp);
        }
        Message::DeleteForward => {
            model.documents.current_mut().delete_char(&vp);
        }
        Message::Undo => {
            if !model.undo.pull(model.documents.current_mut(), &vp) {
                model.show_message("Nothing to undo");
            }
        }

        // Selection and clipboard
        Message::ToggleMark => {
            let doc = model.documents.current_mut();
            if doc.mark().is_some() {
                doc.clear_mark();
                model.show_message("Mark cleared");
            } else {
                doc.set_mark();
                model.show_message("Mark set");
            }
        }
        Message::Copy => {
            let doc = model.documents.current_mut();
            if model.clipboard.copy_selection(doc) {
                doc.clear_mark();
                model.show_message("Copied selection");
            } else {
                model.clipboard.copy_line(doc);
                model.show_message("Copied line");
            }
        }
        Message::Cut => {
            let doc = model.documents.current_mut();
            if !model.clipboard.cut_selection(doc, &vp) {
                model.clipboard.cut_line(doc, &vp);
            }
        }
        Message::Paste => {
            if !model.clipboard.paste(model.documents.current_mut(), &vp) {
                model.show_message("Clipboard is empty");
            }
        }

        // Search
        Message::Find(needle) => {
            model.last_search = Some(needle);
            find_next(&mut model);
        }
        Message::FindNext => {
            if model.last_search.is_some() {
                find_next(&mut model);
            } else {
                model.open_prompt(PromptKind::Find, b"");
            }
        }

        // Prompt
        Message::StartPrompt(kind) => {
            let initial = match kind {
                PromptKind::SaveAs | PromptKind::SaveBeforeClose => model
                    .current_document()
                    .filename()
                    .to_string_lossy()
                    .into_owned()
                    .into_bytes(),
                PromptKind::Find => model.last_search.clone().unwrap_or_default(),
                PromptKind::Open | PromptKind::GotoLine | PromptKind::Command => Vec::new(),
            };
            model.open_prompt(kind, &initial);
        }
        Message::PromptInput(key) => {
            if let Some(active) = model.prompt.take() {
                handle_prompt_key(&mut model, active, key);
            }
        }
        Message::RunCommand(command) => run_command(&mut model, &command),

        // Documents
        Message::NewDocument => {
            model.documents.add(Document::new(NEW_DOCUMENT_NAME));
            info!(count = model.documents.len(), "new document");
        }
        Message::OpenFile(_) | Message::SaveAs { .. } => {
            // File I/O happens in the side effect handler.
        }
        Message::CloseDocument => {
            if model.current_document().is_modified() {
                let filename = model.current_document().filename().to_string_lossy().into_owned();
                model.open_prompt(PromptKind::SaveBeforeClose, filename.as_bytes());
            } else {
                model.close_current_document();
            }
        }
        Message::NextDocument => model.documents.cycle_next(),

        // Display
        Message::ToggleLineNumbers => {
            model.options.show_linenumbers = !model.options.show_linenumbers;
            model.apply_options();
        }
        Message::Resize(width, height) => {
            model.viewport.resize(
                usize::from(width),
                usize::from(height.saturating_sub(STATUS_ROWS)),
            );
        }

        // Application
        Message::Quit => {
            if model.documents.any_modified() && !model.quit_confirmed {
                model.quit_confirmed = true;
                model.show_message("Unsaved changes. Press Ctrl+Q again to quit");
            } else {
                model.should_quit = true;
            }
        }
    }

    model.fit_current();
    if cfg!(debug_assertions)
        && let Err(err) = model.current_document().verify()
    {
        error!(%err, "document invariant broken");
    }
    model
}

fn find_next(model: &mut Model) {
    let vp = model.viewport;
    let Some(needle) = model.last_search.as_deref() else {
        return;
    };
    if !model.documents.current_mut().find(needle, &vp) {
        model.show_message("Not found");
    }
}

fn handle_prompt_key(model: &mut Model, mut active: ActivePrompt, key: PromptKey) {
    match active.line.handle(key) {
        PromptOutcome::Pending => model.prompt = Some(active),
        PromptOutcome::Cancelled => {
            if active.kind == PromptKind::SaveBeforeClose {
                model.show_message("Close cancelled");
            }
        }
        PromptOutcome::Submitted(input) => submit_prompt(model, active.kind, input),
    }
}

fn submit_prompt(model: &mut Model, kind: PromptKind, input: Vec<u8>) {
    let text = String::from_utf8_lossy(&input).trim().to_string();
    match kind {
        PromptKind::SaveBeforeClose if text.is_empty() => model.close_current_document(),
        _ if text.is_empty() && kind != PromptKind::Command => {}
        PromptKind::SaveAs => model.queue(Message::SaveAs {
            path: PathBuf::from(text),
            then_close: false,
        }),
        PromptKind::SaveBeforeClose => model.queue(Message::SaveAs {
            path: PathBuf::from(text),
            then_close: true,
        }),
        PromptKind::Open => model.queue(Message::OpenFile(PathBuf::from(text))),
        PromptKind::Find => model.queue(Message::Find(input)),
        PromptKind::GotoLine => match text.parse() {
            Ok(line) => model.queue(Message::GotoLine(line)),
            Err(_) => model.show_message("Invalid line number"),
        },
        PromptKind::Command => model.queue(Message::RunCommand(text)),
    }
}

fn run_command(model: &mut Model, command: &str) {
    let command = command.trim();
    let (verb, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(verb, rest)| (verb, rest.trim()));
    match verb {
        "" => {}
        "set" => match split_assignment(rest) {
            Some((key, value)) => match model.options.set(key, value) {
                Ok(()) => {
                    model.apply_options();
                    model.show_message(format!("{key} = {value}"));
                }
                Err(err) => model.show_message(err.to_string()),
            },
            None => model.show_message("Usage: set <option> <value>"),
        },
        "goto" => match rest.parse() {
            Ok(line) => model.queue(Message::GotoLine(line)),
            Err(_) => model.show_message("Invalid line number"),
        },
        _ => model.show_message("Unknown command"),
    }
}
