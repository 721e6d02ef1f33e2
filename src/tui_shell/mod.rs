use anyhow::Result;

mod app;

mod input;
mod modal;

// Make core TUI types available to submodules via `super::...`.
use app::{App, Modal, ModalKind, TextInputAction};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
