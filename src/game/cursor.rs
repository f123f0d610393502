/// Column pointer over the board. The row is always the top row since discs
/// fall to the lowest empty cell regardless of where the cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    column: usize,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Create a cursor at the top-left cell of a `rows` x `cols` grid.
    ///
    /// # Panics
    ///
    /// Panics if either bound is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "cursor bounds must be non-empty");
        Cursor {
            row: 0,
            column: 0,
            rows,
            cols,
        }
    }

    pub fn move_left(&mut self) {
        if self.column > 0 {
            self.column -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.column + 1 < self.cols {
            self.column += 1;
        }
    }

    /// Current `(row, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Grid bounds as `(rows, cols)`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
