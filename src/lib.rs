pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
