use proptest::prelude::*;
use quill::editor::{
    Clipboard, Direction, Document, Position, UndoLog, Viewport, column_to_display,
};

#[derive(Debug, Clone)]
enum Edit {
    Insert(u8),
    Enter,
    Backspace,
    Delete,
    Move(Direction),
    WordRight,
    PageDown,
    PageUp,
    End,
    Mark,
    CutSelection,
    CutLine,
    Paste,
    Undo,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        4 => prop::sample::select(b"ab \t".to_vec()).prop_map(Edit::Insert),
        2 => Just(Edit::Enter),
        2 => Just(Edit::Backspace),
        1 => Just(Edit::Delete),
        4 => prop::sample::select(vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ])
        .prop_map(Edit::Move),
        1 => Just(Edit::WordRight),
        1 => Just(Edit::PageDown),
        1 => Just(Edit::PageUp),
        1 => Just(Edit::End),
        1 => Just(Edit::Mark),
        1 => Just(Edit::CutSelection),
        1 => Just(Edit::CutLine),
        1 => Just(Edit::Paste),
        1 => Just(Edit::Undo),
    ]
}

fn apply(edit: &Edit, doc: &mut Document, clip: &mut Clipboard, undo: &mut UndoLog, vp: &Viewport) {
    match *edit {
        Edit::Insert(byte) => {
            let at = doc.insert_char(byte, vp);
            undo.push(at, byte);
        }
        Edit::Enter => doc.enter(vp),
        Edit::Backspace => {
            doc.backspace(vp);
        }
        Edit::Delete => {
            doc.delete_char(vp);
        }
        Edit::Move(direction) => doc.move_cursor(direction, vp),
        Edit::WordRight => doc.move_word_right(vp),
        Edit::PageDown => doc.page_down(vp),
        Edit::PageUp => doc.page_up(vp),
        Edit::End => doc.move_end(vp),
        Edit::Mark => doc.set_mark(),
        Edit::CutSelection => {
            clip.cut_selection(doc, vp);
        }
        Edit::CutLine => clip.cut_line(doc, vp),
        Edit::Paste => {
            clip.paste(doc, vp);
        }
        Edit::Undo => {
            undo.pull(doc, vp);
        }
    }
}

/// Position of the byte (or line break) an edit is about to delete.
fn deleted_position(edit: &Edit, doc: &Document) -> Option<Position> {
    match edit {
        Edit::Backspace if doc.cx() > 0 => Some(Position::new(doc.row(), doc.cx() - 1)),
        Edit::Backspace if doc.row() > 0 => {
            let prev = doc.lines().nth(doc.row() - 1)?;
            Some(Position::new(doc.row() - 1, doc.lines().get(prev).len()))
        }
        Edit::Delete => Some(doc.cursor()),
        _ => None,
    }
}

proptest! {
    #[test]
    fn edits_preserve_document_invariants(
        edits in prop::collection::vec(edit(), 0..120),
        height in 2usize..6,
    ) {
        let vp = Viewport::new(12, height, 4);
        let mut doc = Document::from_text("p.txt", "first line\n\tsecond\n\nlast");
        let mut clip = Clipboard::new();
        let mut undo = UndoLog::new();

        // Byte under the mark when it was set; `None` inside means the mark
        // sat on a line end.
        let mut marked: Option<Option<u8>> = None;

        for edit in &edits {
            let mark_before = doc.mark().map(|mark| mark.position());
            let deleted = deleted_position(edit, &doc);
            apply(edit, &mut doc, &mut clip, &mut undo, &vp);

            match edit {
                Edit::Mark => marked = doc.mark().map(|mark| doc.byte_at(mark.row, mark.col)),
                Edit::Undo => marked = None,
                _ if deleted.is_some() && deleted == mark_before => marked = None,
                _ => {}
            }
            if doc.mark().is_none() {
                marked = None;
            }
            if let (Some(mark), Some(expected)) = (doc.mark(), marked) {
                prop_assert_eq!(
                    doc.byte_at(mark.row, mark.col),
                    expected,
                    "mark drifted after {:?}: {:?}",
                    edit,
                    doc.text_lines()
                );
            }
            prop_assert!(doc.verify().is_ok(), "after {:?}: {:?}", edit, doc.verify());
            prop_assert!(doc.cy() < vp.height);
            let dx = column_to_display(doc.current_line().text(), doc.cx(), vp.tab_width);
            prop_assert!(dx >= doc.scroll_x());
            prop_assert!(dx - doc.scroll_x() < vp.text_width(doc.left_margin()));
        }
    }

    #[test]
    fn insert_then_undo_restores_text(text in "[a-z \t]{0,40}") {
        let vp = Viewport::new(16, 4, 4);
        let mut doc = Document::from_text("u.txt", "base");
        let mut undo = UndoLog::new();
        doc.move_end(&vp);
        for byte in text.bytes() {
            let at = doc.insert_char(byte, &vp);
            undo.push(at, byte);
        }
        while undo.pull(&mut doc, &vp) {}
        prop_assert_eq!(doc.text_lines(), vec!["base".to_string()]);
    }
}
