//! Core Connect Four logic: board and win detection, column cursor, player
//! identities, and the turn engine that drives a [`Renderer`].

mod board;
mod cursor;
mod engine;
mod palette;
mod player;
mod renderer;

pub use board::{Board, Cell, GameResult, COLS, ROWS};
pub use cursor::Cursor;
pub use engine::{Engine, Phase};
pub use palette::{DiscColor, Palette};
pub use player::Player;
pub use renderer::Renderer;
