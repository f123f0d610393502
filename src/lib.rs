//! # Connect Four
//!
//! Two-player Connect Four played in the terminal. The game engine is kept
//! apart from the screen: it owns the board and pushes every change through
//! the [`game::Renderer`] trait, which the Ratatui front end implements.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, cursor, players and the turn engine
//! - [`input`] — Key-to-command bindings
//! - [`ui`] — Terminal screen and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-based tracing setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
