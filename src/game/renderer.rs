use super::{Cell, DiscColor};

/// Output surface the engine pushes state changes to.
///
/// The engine owns the authoritative board; implementors only mirror what
/// they are told. Calls arrive in order from a single thread and `render`
/// is requested once the mirrored state is consistent.
pub trait Renderer {
    /// Write a marker into the mirrored grid.
    fn set_grid(&mut self, row: usize, col: usize, cell: Cell);

    /// Color a cell of the mirrored grid.
    fn set_text_color(&mut self, row: usize, col: usize, color: DiscColor);

    /// Replace the status line.
    fn set_message(&mut self, text: &str);

    /// Mark the column the cursor points at.
    fn highlight_column(&mut self, col: usize);

    fn render(&mut self);

    /// Stop accepting input and end the session.
    fn quit(&mut self);
}
