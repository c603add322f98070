use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::*;
use crate::app::{Message, Model, PromptKind, update};
use crate::config::Options;
use crate::editor::{Document, DocumentSet};

fn create_test_model(text: &str, size: (u16, u16)) -> Model {
    let doc = Document::from_text("notes.txt", text);
    Model::new(DocumentSet::new(doc), Options::default(), size)
}

fn draw(model: &Model, size: (u16, u16)) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(size.0, size.1)).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
}

#[test]
fn test_split_rows_reserves_status_and_prompt() {
    let [text, status, prompt] = split_rows(Rect::new(0, 0, 40, 10));
    assert_eq!(text.height, 8);
    assert_eq!((status.y, status.height), (8, 1));
    assert_eq!((prompt.y, prompt.height), (9, 1));
}

#[test]
fn test_text_lines_are_drawn() {
    let model = create_test_model("first\nsecond", (20, 6));
    let terminal = draw(&model, (20, 6));
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 0).starts_with("first"));
    assert!(row_text(buffer, 1).starts_with("second"));
    assert_eq!(row_text(buffer, 2).trim(), "");
}

#[test]
fn test_tabs_expand_to_tab_stops() {
    let model = create_test_model("\tx\nab\ty", (20, 6));
    let terminal = draw(&model, (20, 6));
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 0).starts_with("    x"));
    assert!(row_text(buffer, 1).starts_with("ab  y"));
}

#[test]
fn test_status_bar_shows_position_and_modified() {
    let model = create_test_model("abc\ndef", (40, 6));
    let model = update(model, Message::MoveCursor(crate::editor::Direction::Down));
    let model = update(model, Message::InsertChar(b'!'));
    let terminal = draw(&model, (40, 6));
    let status = row_text(terminal.backend().buffer(), 4);
    assert!(status.contains("notes.txt* L2/2 C2"), "status was {status:?}");
}

#[test]
fn test_status_text_includes_message() {
    let model = update(create_test_model("", (80, 24)), Message::Undo);
    let text = status_text(&model);
    assert!(text.contains("Nothing to undo"));
    assert!(text.find("Nothing").unwrap() >= 30);
}

#[test]
fn test_line_numbers_are_drawn_in_margin() {
    let text = (1..=10).map(|n| format!("l{n}")).collect::<Vec<_>>().join("\n");
    let model = update(create_test_model(&text, (20, 14)), Message::ToggleLineNumbers);
    let terminal = draw(&model, (20, 14));
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 0).starts_with(" 1 l1"));
    assert!(row_text(buffer, 9).starts_with("10 l10"));
}

#[test]
fn test_selection_is_reversed() {
    let model = create_test_model("hello world", (20, 6));
    let model = update(model, Message::ToggleMark);
    let model = update(model, Message::MoveWordRight);
    let terminal = draw(&model, (20, 6));
    let buffer = terminal.backend().buffer();
    assert!(buffer[(0, 0)].modifier.contains(Modifier::REVERSED));
    assert!(buffer[(6, 0)].modifier.contains(Modifier::REVERSED));
    assert!(!buffer[(7, 0)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_long_line_scrolls_horizontally() {
    let text = format!("{}END", "x".repeat(30));
    let model = update(create_test_model(&text, (10, 4)), Message::MoveEnd);
    let terminal = draw(&model, (10, 4));
    let row = row_text(terminal.backend().buffer(), 0);
    assert_eq!(row, "xxxxxxEND ");
}

#[test]
fn test_prompt_line_shows_label_and_input() {
    let model = update(
        create_test_model("abc", (40, 6)),
        Message::StartPrompt(PromptKind::SaveAs),
    );
    let mut terminal = draw(&model, (40, 6));
    let prompt = row_text(terminal.backend().buffer(), 5);
    assert!(prompt.starts_with("Save as: notes.txt"));
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!((cursor.x, cursor.y), (18, 5));
}

#[test]
fn test_cursor_follows_document() {
    let model = create_test_model("\tab", (20, 6));
    let model = update(model, Message::MoveEnd);
    let mut terminal = draw(&model, (20, 6));
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!((cursor.x, cursor.y), (6, 0));
}
