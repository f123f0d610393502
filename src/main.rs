use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Player;
use connect_four::logging;
use connect_four::ui::App;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override the player who moves first (X or O)
    #[arg(long)]
    starting_player: Option<Player>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(player) = cli.starting_player {
        config.game.starting_player = player;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    logging::init(&config.logging).context("initializing logging")?;
    tracing::info!(starting_player = config.game.starting_player.name(), "starting game");

    let summary = run(&config).context("running terminal UI")?;
    println!("{summary}");
    Ok(())
}

fn run(config: &AppConfig) -> io::Result<String> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(terminal, config);
    let res = app.run();

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

    res.map(|()| app.summary())
}
