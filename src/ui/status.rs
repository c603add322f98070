use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

/// Column the transient message starts at.
const MESSAGE_COLUMN: usize = 30;

/// `filename[*] L<row>/<lines> C<col>`, padded, then any message.
pub fn status_text(model: &Model) -> String {
    let doc = model.current_document();
    let modified = if doc.is_modified() { "*" } else { "" };
    let mut text = format!(
        " {}{modified} L{}/{} C{}",
        doc.display_name(),
        doc.row() + 1,
        doc.line_count(),
        doc.cx() + 1,
    );
    if model.documents.len() > 1 {
        text.push_str(&format!(
            " [{}/{}]",
            model.documents.current_index() + 1,
            model.documents.len()
        ));
    }
    if doc.mark().is_some() {
        text.push_str(" MARK");
    }
    if let Some(message) = model.active_message() {
        let pad = MESSAGE_COLUMN.saturating_sub(text.len()).max(2);
        text.push_str(&" ".repeat(pad));
        text.push_str(message);
    }
    text
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(status_text(model))
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
}

/// Draw the active prompt, returning where its cursor goes.
pub fn render_prompt_line(model: &Model, frame: &mut Frame, area: Rect) -> Option<Position> {
    let prompt = model.prompt.as_ref()?;
    if area.height == 0 {
        return None;
    }
    let label = prompt.line.label();
    let input = String::from_utf8_lossy(prompt.line.input());
    let line = Line::from(vec![
        Span::styled(label.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(input.into_owned()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let col = label.len() + prompt.line.cursor();
    let x = area.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
    Some(Position::new(x.min(area.right().saturating_sub(1)), area.y))
}
