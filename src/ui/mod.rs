//! Terminal UI: the ratatui-backed screen the engine renders to, and the
//! crossterm event loop that feeds it key presses.

mod app;
mod board_widget;
mod game_view;
mod screen;

pub use app::App;
pub use screen::{Mirror, TerminalScreen};
