//! Ratatui front-end for the attendance roster. The roster store owns all
//! state; this module only keeps cursors, form drafts and the status line.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
