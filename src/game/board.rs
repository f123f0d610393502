use std::fmt;
use std::str::FromStr;

use super::Player;
use crate::error::{MoveError, ParseBoardError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned discs needed to win.
const WIN_LENGTH: usize = 4;

/// `(row, col)` steps for right, down, down-right and up-right. Together with
/// every cell as an origin these cover every window on the board exactly once.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Single-character form used by `Display` and `FromStr`
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Winner(Player),
    Tie,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Lowest empty row of a column, `None` when full or out of range
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Evaluate the whole board.
    ///
    /// Every occupied cell is tried as the start of a four-cell window in each
    /// of the four directions. The first complete window found decides the
    /// winner; otherwise a board without empty cells is a tie.
    pub fn result(&self) -> GameResult {
        let mut has_empty = false;

        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                let Some(player) = cell.player() else {
                    has_empty = true;
                    continue;
                };

                if DIRECTIONS
                    .iter()
                    .any(|&step| self.window_matches(row, col, step, cell))
                {
                    return GameResult::Winner(player);
                }
            }
        }

        if has_empty {
            GameResult::InProgress
        } else {
            GameResult::Tie
        }
    }

    /// Whether the window of `WIN_LENGTH` cells starting at `(row, col)` and
    /// following `step` lies on the board and holds only `cell`.
    fn window_matches(&self, row: usize, col: usize, step: (isize, isize), cell: Cell) -> bool {
        (0..WIN_LENGTH as isize).all(|i| {
            let r = row as isize + step.0 * i;
            let c = col as isize + step.1 * i;
            self.cell_at(r, c) == Some(cell)
        })
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the `Display` form: one line per row, top row first, using `X`,
/// `O` and `.`. Blank lines and surrounding whitespace are ignored. Gravity is
/// not enforced, so any arrangement can be described.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(ParseBoardError::RowCount {
                expected: ROWS,
                found: lines.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != COLS {
                return Err(ParseBoardError::RowLength {
                    row,
                    expected: COLS,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'X' => Cell::X,
                    'O' => Cell::O,
                    other => return Err(ParseBoardError::UnknownCell { row, symbol: other }),
                };
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::X).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::X);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::O).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::O);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::X).unwrap();
        }

        let before = board;
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::O), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::X), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::X).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(Board::new().result(), GameResult::InProgress);
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let board = board(
            "
            .......
            .......
            .......
            .......
            .......
            ...OOOO
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_horizontal_run_of_five_in_top_row() {
        let board = board(
            "
            ..XXXXX
            ..OOO..
            .......
            .......
            .......
            .......
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_vertical_win_in_top_left_corner() {
        let board = board(
            "
            O......
            O......
            O......
            O......
            X......
            X......
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_vertical_win_in_bottom_right_corner() {
        let board = board(
            "
            .......
            .......
            ......X
            ......X
            ......X
            ......X
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_down_right_diagonal_ending_in_corner() {
        let board = board(
            "
            .......
            .......
            ...X...
            ...OX..
            ...OOX.
            ...OOOX
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_up_right_diagonal_from_bottom_left_corner() {
        let board = board(
            "
            .......
            .......
            ...O...
            ..OX...
            .OXX...
            OXXX...
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_up_right_diagonal_reaching_top_right_corner() {
        let board = board(
            "
            ......X
            .....XO
            ....XOO
            ...XOOX
            ..OXXOO
            .OXOXXO
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_diagonal_run_not_starting_at_first_scanned_cell() {
        // The \ run starts at (1, 1); (0, 0) holds a different marker
        let board = board(
            "
            X......
            .O.....
            ..O....
            ...O...
            ....O..
            .......
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board(
            "
            .......
            .......
            .......
            .......
            .......
            XXX.XXX
            ",
        );
        assert_eq!(board.result(), GameResult::InProgress);
    }

    #[test]
    fn test_full_board_without_four_is_tie() {
        let board = board(
            "
            OXOXOXX
            XOOOXOO
            XXXOXXX
            XXOOXXO
            OXOXOXX
            OOOXOOO
            ",
        );
        assert!(board.is_full());
        assert_eq!(board.result(), GameResult::Tie);
    }

    #[test]
    fn test_full_board_with_four_is_win() {
        let board = board(
            "
            OXOXOXX
            XOOOXOO
            XXXOXXX
            XXOOXXO
            OXOXOXX
            OOOOOOO
            ",
        );
        assert_eq!(board.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_result_does_not_change_board() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::X).unwrap();
        let before = board;
        board.result();
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_matches_parse() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::X).unwrap();
        board.drop_piece(6, Cell::O).unwrap();
        let text = board.to_string();
        assert!(text.ends_with("X.....O"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::RowCount {
                expected: ROWS,
                found: 1
            })
        );
        let err = ".......\n.......\n.......\n.......\n.......\n..Z....".parse::<Board>();
        assert_eq!(err, Err(ParseBoardError::UnknownCell { row: 5, symbol: 'Z' }));
        let err = ".......\n.......\n.......\n.......\n.......\n...".parse::<Board>();
        assert_eq!(
            err,
            Err(ParseBoardError::RowLength {
                row: 5,
                expected: COLS,
                found: 3
            })
        );
    }
}
