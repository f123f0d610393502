use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::{Board, Cursor, GameResult, Palette, Player, Renderer, COLS, ROWS};
use crate::error::MoveError;
use crate::input::CommandRegistry;

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    GameOver(GameResult),
}

/// Turn engine: owns the board, cursor and turn, and pushes every visible
/// change to its renderer.
pub struct Engine<R: Renderer> {
    board: Board,
    cursor: Cursor,
    turn: Player,
    palette: Palette,
    phase: Phase,
    renderer: R,
}

impl<R: Renderer> Engine<R> {
    /// Start a game. The renderer receives the initial cursor, prompt and a
    /// first render.
    pub fn new(renderer: R, starting_player: Player, palette: Palette) -> Self {
        let mut engine = Engine {
            board: Board::new(),
            cursor: Cursor::new(ROWS, COLS),
            turn: starting_player,
            palette,
            phase: Phase::AwaitingInput,
            renderer,
        };
        engine.renderer.highlight_column(engine.cursor.column());
        engine.prompt();
        engine.renderer.render();
        engine
    }

    /// Key bindings for the three game commands.
    pub fn commands() -> CommandRegistry<Self>
    where
        R: 'static,
    {
        let mut commands = CommandRegistry::new();
        commands.add_command(KeyCode::Left, "move disc to the left", Self::move_left);
        commands.add_command(KeyCode::Right, "move disc to the right", Self::move_right);
        commands.add_command(KeyCode::Enter, "drop the disc to the board", |engine: &mut Self| {
            if let Err(err) = engine.confirm() {
                debug!(%err, "drop rejected");
            }
        });
        commands
    }

    pub fn move_left(&mut self) {
        if self.is_over() {
            return;
        }
        self.cursor.move_left();
        self.renderer.highlight_column(self.cursor.column());
    }

    pub fn move_right(&mut self) {
        if self.is_over() {
            return;
        }
        self.cursor.move_right();
        self.renderer.highlight_column(self.cursor.column());
    }

    /// Drop the current player's disc at the cursor column, then either end
    /// the game or pass the turn. A rejected drop leaves everything as it was.
    pub fn confirm(&mut self) -> Result<GameResult, MoveError> {
        let player = self.turn;
        let column = self.cursor.column();
        let row = self.drop_disc(column, player)?;
        debug!(player = player.name(), row, column, "disc dropped");

        let result = self.check_result();
        if result.is_terminal() {
            self.end_game(result);
        } else {
            self.turn = self.turn.other();
            self.prompt();
        }
        Ok(result)
    }

    /// Place `player`'s disc in the lowest empty cell of `column` and paint
    /// it. Does not evaluate the board or touch the turn.
    pub fn drop_disc(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let cell = player.to_cell();
        let row = self.board.drop_piece(column, cell)?;
        self.renderer.set_grid(row, column, cell);
        self.renderer
            .set_text_color(row, column, self.palette.for_player(player));
        Ok(row)
    }

    pub fn check_result(&self) -> GameResult {
        self.board.result()
    }

    /// Freeze the game, show the closing message and shut the renderer down.
    /// Later calls are ignored.
    pub fn end_game(&mut self, result: GameResult) {
        if self.is_over() {
            return;
        }
        self.phase = Phase::GameOver(result);

        let message = match result {
            GameResult::Winner(player) => format!("Player {} wins!", player.name()),
            GameResult::Tie => "Tie game!".to_string(),
            GameResult::InProgress => "Game Over".to_string(),
        };
        info!(?result, "game over");

        self.renderer.set_message(&message);
        self.renderer.render();
        self.renderer.quit();
    }

    fn prompt(&mut self) {
        let message = format!("Player {}'s turn", self.turn.name());
        self.renderer.set_message(&message);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
