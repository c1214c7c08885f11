use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use torus_snake::config::{FRAME_POLL_MS, GRID_SIZE, TICK_INTERVAL_MS};
use torus_snake::game::{GameState, GameStatus};
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::terminal_runtime::TerminalSession;
use torus_snake::theme::ThemeCatalog;

#[derive(Debug, Parser)]
#[command(version, about = "Classic wrap-around snake for the terminal")]
struct Cli {
    /// Seed the food placement RNG for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Theme name to play with.
    #[arg(long)]
    theme: Option<String>,

    /// Print available theme names and exit.
    #[arg(long)]
    list_themes: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut catalog = ThemeCatalog::load();
    if cli.list_themes {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(name) = cli.theme.as_deref() {
        if !catalog.select(name) {
            eprintln!(
                "Warning: unknown theme {name:?}, using {}",
                catalog.current().name
            );
        }
    }

    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli, &catalog)
}

fn run(session: &mut TerminalSession, cli: &Cli, catalog: &ThemeCatalog) -> io::Result<()> {
    let mut input = InputHandler::new();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID_SIZE, seed),
        None => GameState::new(GRID_SIZE),
    };
    let theme = catalog.current();

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let frame_poll = Duration::from_millis(FRAME_POLL_MS);
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(game_input) = input.poll_input(frame_poll)? {
            if game_input == GameInput::Quit {
                return Ok(());
            }

            state.apply_input(game_input);
        }

        // The tick timer stops once the game leaves Playing; the end screen
        // stays up until the player quits.
        if state.status == GameStatus::Playing && last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }
}
