//! Key bindings: maps key presses to handler closures.

mod commands;

pub use commands::{key_label, Command, CommandRegistry};
