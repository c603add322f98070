use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::PromptKind;
use crate::app::{App, Message, Model};
use crate::editor::{Direction, PromptKey};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.prompt.is_some() {
            return prompt_key(key).map(Message::PromptInput);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'q' => Some(Message::Quit),
                's' => Some(Message::StartPrompt(PromptKind::SaveAs)),
                'o' => Some(Message::StartPrompt(PromptKind::Open)),
                'n' => Some(Message::NewDocument),
                'b' => Some(Message::ToggleMark),
                'c' => Some(Message::Copy),
                'x' => Some(Message::Cut),
                'v' => Some(Message::Paste),
                'z' => Some(Message::Undo),
                'f' => Some(Message::StartPrompt(PromptKind::Find)),
                'g' => Some(Message::StartPrompt(PromptKind::GotoLine)),
                'l' => Some(Message::ToggleLineNumbers),
                _ => None,
            },
            KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::MoveWordRight),
            KeyCode::Home if ctrl => Some(Message::MoveToStart),
            KeyCode::End if ctrl => Some(Message::MoveToEnd),
            KeyCode::PageDown if ctrl => Some(Message::NextDocument),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Tab => Some(Message::InsertChar(b'\t')),
            KeyCode::F(3) => Some(Message::FindNext),
            KeyCode::F(4) => Some(Message::CloseDocument),
            KeyCode::Esc => Some(Message::StartPrompt(PromptKind::Command)),
            KeyCode::Char(c) if !alt => printable_byte(c).map(Message::InsertChar),
            _ => None,
        }
    }
}

fn prompt_key(key: KeyEvent) -> Option<PromptKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(PromptKey::Submit),
        KeyCode::Esc => Some(PromptKey::Cancel),
        KeyCode::Left => Some(PromptKey::Left),
        KeyCode::Right => Some(PromptKey::Right),
        KeyCode::Home => Some(PromptKey::Home),
        KeyCode::End => Some(PromptKey::End),
        KeyCode::Backspace => Some(PromptKey::Backspace),
        KeyCode::Delete => Some(PromptKey::Delete),
        KeyCode::Char(c) if !ctrl => printable_byte(c).map(PromptKey::Char),
        _ => None,
    }
}

/// Single-byte printable characters; everything else is ignored.
fn printable_byte(c: char) -> Option<u8> {
    u8::try_from(c)
        .ok()
        .filter(|byte| byte.is_ascii_graphic() || *byte == b' ')
}
