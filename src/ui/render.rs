use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, STATUS_ROWS};
use crate::editor::{Document, Extents, Viewport, byte_width};

use super::status;

/// Split the screen into text area, status bar and prompt line.
pub fn split_rows(area: Rect) -> [Rect; 3] {
    let text_height = area.height.saturating_sub(STATUS_ROWS);
    let text = Rect {
        height: text_height,
        ..area
    };
    let status = Rect {
        y: area.y + text_height,
        height: area.height.saturating_sub(text_height).min(1),
        ..area
    };
    let prompt = Rect {
        y: status.y + status.height,
        height: area.height.saturating_sub(text_height + status.height),
        ..area
    };
    [text, status, prompt]
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let [text_area, status_area, prompt_area] = split_rows(frame.area());

    render_text(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);
    let prompt_cursor = status::render_prompt_line(model, frame, prompt_area);

    match prompt_cursor {
        Some(position) => frame.set_cursor_position(position),
        None => {
            let (col, row) = model.current_document().cursor_screen_position(&model.viewport);
            let x = text_area.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
            let y = text_area.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
            if x < text_area.right() && y < text_area.bottom() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    let doc = model.current_document();
    let vp = &model.viewport;
    let extents = doc.selection_extents();
    let rows = doc
        .lines()
        .ids_from(doc.first_screen_id())
        .take(usize::from(area.height))
        .enumerate()
        .map(|(y, id)| {
            let row = doc.scroll_y() + y;
            render_line(doc, vp, doc.lines().get(id).text(), row, extents)
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(rows), area);
}

fn render_line(
    doc: &Document,
    vp: &Viewport,
    text: &[u8],
    row: usize,
    extents: Option<Extents>,
) -> Line<'static> {
    let mut spans = Vec::new();
    let margin = doc.left_margin();
    if margin > 0 {
        spans.push(Span::styled(
            format!("{:>width$} ", row + 1, width = margin - 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let selected = |col: usize| extents.is_some_and(|ext| ext.contains(row, col));
    let mut cells: Vec<(char, bool)> = Vec::with_capacity(text.len());
    for (col, &byte) in text.iter().enumerate() {
        let width = byte_width(byte, cells.len(), vp.tab_width);
        let ch = match byte {
            b'\t' => ' ',
            b' '..=b'~' => char::from(byte),
            _ => '?',
        };
        let sel = selected(col);
        cells.extend(std::iter::repeat_n((ch, sel), width));
    }
    if selected(text.len()) {
        cells.push((' ', true));
    }

    let visible = cells
        .into_iter()
        .skip(doc.scroll_x())
        .take(vp.text_width(margin));
    let mut run = String::new();
    let mut run_selected = false;
    for (ch, sel) in visible {
        if sel != run_selected && !run.is_empty() {
            spans.push(cell_span(std::mem::take(&mut run), run_selected));
        }
        run_selected = sel;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(cell_span(run, run_selected));
    }
    Line::from(spans)
}

fn cell_span(text: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::raw(text)
    }
}
