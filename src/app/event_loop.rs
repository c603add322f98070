use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::{App, Message, Model, update};
use crate::editor::{BLANK_DOCUMENT_NAME, Document, DocumentSet};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if a file named on the command line cannot be read,
    /// or if terminal setup or event reading fails.
    pub fn run(&mut self) -> Result<()> {
        let documents = self.load_documents()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; quill requires an interactive terminal")?;
        let size = terminal.size()?;
        let mut model = Model::new(documents, self.options, (size.width, size.height));
        info!(width = size.width, height = size.height, "session started");

        let result = Self::event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }

    /// Open every file named on the command line, or a blank document.
    pub(super) fn load_documents(&self) -> Result<DocumentSet> {
        if self.files.is_empty() {
            return Ok(DocumentSet::new(Document::new(BLANK_DOCUMENT_NAME)));
        }
        let documents = self
            .files
            .iter()
            .map(|path| {
                Document::open(path).with_context(|| format!("Failed to open {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;
        DocumentSet::from_documents(documents).context("No documents to edit")
    }

    /// Apply `msg` and any messages it queues, with their side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            debug!(?msg, "message");
            let side_msg = msg.clone();
            *model = update(std::mem::take(model), msg);
            Self::handle_message_side_effects(model, &side_msg);
            next = model.take_follow_up();
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;
            model.tick_message();

            if let Some(msg) = Self::handle_event(&event::read()?, model) {
                Self::dispatch(model, msg);
            }
            if model.should_quit {
                info!("session ended");
                break;
            }
        }
        Ok(())
    }
}
