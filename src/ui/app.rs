use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::trace;

use super::TerminalScreen;
use crate::config::AppConfig;
use crate::game::{Engine, GameResult, Renderer, COLS, ROWS};
use crate::input::{key_label, CommandRegistry};

type GameEngine<B> = Engine<TerminalScreen<B>>;

pub struct App<B: Backend + 'static> {
    engine: GameEngine<B>,
    commands: CommandRegistry<GameEngine<B>>,
}

impl<B: Backend + 'static> App<B> {
    pub fn new(terminal: Terminal<B>, config: &AppConfig) -> Self {
        let mut commands = GameEngine::<B>::commands();
        commands.add_command(KeyCode::Char('q'), "quit the game", quit_game::<B>);
        commands.add_command(KeyCode::Esc, "quit the game", quit_game::<B>);

        let mut screen = TerminalScreen::initialize(terminal, ROWS, COLS);
        screen.set_grid_lines(config.display.grid_lines);
        screen.set_controls(commands.descriptions().collect());

        let engine = Engine::new(screen, config.game.starting_player, config.display.palette());
        App { engine, commands }
    }

    /// Main application loop
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if let Some(err) = self.engine.renderer_mut().take_error() {
                return Err(err);
            }

            if self.engine.renderer().should_quit() {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(..) => self.engine.renderer_mut().render(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.commands.dispatch(key.code, &mut self.engine) {
            self.engine.renderer_mut().render();
        } else {
            trace!(key = %key_label(key.code), "unbound key");
        }
    }

    pub fn engine(&self) -> &GameEngine<B> {
        &self.engine
    }

    /// Final board and status line, for printing once the terminal is restored.
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.engine.board(), self.engine.renderer().message())
    }
}

/// Leave before a result: the engine closes the game with its generic message.
fn quit_game<B: Backend>(engine: &mut GameEngine<B>) {
    engine.end_game(GameResult::InProgress);
}
