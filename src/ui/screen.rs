use std::io;

use ratatui::{backend::Backend, Terminal};
use tracing::{error, warn};

use super::game_view;
use crate::game::{Cell, DiscColor, Renderer};

/// Screen-side copy of everything that gets drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    cells: Vec<Vec<Cell>>,
    colors: Vec<Vec<Option<DiscColor>>>,
    grid_lines: bool,
    highlighted: usize,
    message: String,
    controls: Vec<(String, String)>,
}

impl Mirror {
    fn new(rows: usize, cols: usize) -> Self {
        Mirror {
            cells: vec![vec![Cell::Empty; cols]; rows],
            colors: vec![vec![None; cols]; rows],
            grid_lines: false,
            highlighted: 0,
            message: String::new(),
            controls: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Mirrored cell, `None` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Paint color of a cell, `None` when unpainted or outside the grid
    pub fn color(&self, row: usize, col: usize) -> Option<DiscColor> {
        *self.colors.get(row)?.get(col)?
    }

    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn controls(&self) -> &[(String, String)] {
        &self.controls
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }
}

/// Terminal-backed [`Renderer`]. Draw failures are kept until the event
/// loop collects them with [`TerminalScreen::take_error`].
pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
    mirror: Mirror,
    should_quit: bool,
    error: Option<io::Error>,
}

impl<B: Backend> TerminalScreen<B> {
    /// Wrap `terminal` with an empty `rows` x `cols` grid.
    pub fn initialize(terminal: Terminal<B>, rows: usize, cols: usize) -> Self {
        TerminalScreen {
            terminal,
            mirror: Mirror::new(rows, cols),
            should_quit: false,
            error: None,
        }
    }

    pub fn set_grid_lines(&mut self, enabled: bool) {
        self.mirror.grid_lines = enabled;
    }

    /// `(key, description)` pairs listed in the controls panel.
    pub fn set_controls(&mut self, controls: Vec<(String, String)>) {
        self.mirror.controls = controls;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn message(&self) -> &str {
        &self.mirror.message
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn draw(&mut self) -> io::Result<()> {
        let mirror = &self.mirror;
        self.terminal
            .draw(|frame| game_view::render(frame, mirror))?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TerminalScreen<B> {
    fn set_grid(&mut self, row: usize, col: usize, cell: Cell) {
        if !self.mirror.in_bounds(row, col) {
            warn!(row, col, "set_grid outside the grid");
            return;
        }
        self.mirror.cells[row][col] = cell;
    }

    fn set_text_color(&mut self, row: usize, col: usize, color: DiscColor) {
        if !self.mirror.in_bounds(row, col) {
            warn!(row, col, "set_text_color outside the grid");
            return;
        }
        self.mirror.colors[row][col] = Some(color);
    }

    fn set_message(&mut self, text: &str) {
        self.mirror.message = text.to_string();
    }

    fn highlight_column(&mut self, col: usize) {
        self.mirror.highlighted = col;
    }

    fn render(&mut self) {
        if let Err(err) = self.draw() {
            error!(%err, "failed to draw screen");
            self.error = Some(err);
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }
}
