//! Terminal UI: the text grid, status bar and prompt line.
//!
//! Rendering only reads the [`Model`](crate::app::Model); all scrolling
//! decisions were already made by the editor core.

mod render;
mod status;

pub use render::{render, split_rows};
pub use status::status_text;

#[cfg(test)]
mod tests;
