use std::path::Path;

use tracing::warn;

use crate::app::{App, Message, Model};
use crate::editor::Document;

impl App {
    /// Perform the file I/O that `update` leaves out.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::SaveAs { path, then_close } => Self::save_current(model, path, *then_close),
            Message::OpenFile(path) => Self::open_document(model, path),
            _ => {}
        }
    }

    fn save_current(model: &mut Model, path: &Path, then_close: bool) {
        let doc = model.documents.current_mut();
        let previous = doc.filename().to_path_buf();
        doc.set_filename(path);
        match doc.save() {
            Ok(()) => {
                let name = doc.display_name();
                model.show_message(format!("Saved {name}"));
                if then_close {
                    model.close_current_document();
                }
            }
            Err(err) => {
                warn!(%err, "save failed");
                doc.set_filename(previous);
                model.show_message(format!("Save failed: {err}"));
            }
        }
    }

    fn open_document(model: &mut Model, path: &Path) {
        let existed = path.exists();
        match Document::open(path) {
            Ok(doc) => {
                let name = doc.display_name();
                model.documents.add(doc);
                model.fit_current();
                if existed {
                    model.show_message(format!("Opened {name}"));
                } else {
                    model.show_message(format!("New file {name}"));
                }
            }
            Err(err) => {
                warn!(%err, "open failed");
                model.show_message(format!("Open failed: {err}"));
            }
        }
    }
}
