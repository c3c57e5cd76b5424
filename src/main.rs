mod app;
mod board;
mod cli;
mod engine;
mod grid;
mod input;
mod powerup;
mod settings;
mod spawner;
mod theme;
mod timer;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crate::app::App;
use crate::cli::Cli;
use crate::engine::Engine;

/// Longest we wait for input before redrawing, so effect countdowns move.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), io::Error> {
    let cli = Cli::parse();

    // Set up logging before anything else
    match File::create(&cli.log_file) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(cli.log_level, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Cannot open {}: {}", cli.log_file.display(), e),
    }

    info!("Starting snekfx");

    let rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let engine = Engine::with_rng(cli.settings(), rng, Instant::now());
    let mut app = App::new(engine, cli.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    info!("Exiting with score {}", app.engine.state().score);

    result.and(restored)
}

/// Runs every cleanup step even if an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let steps = [
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];
    first_error(steps)
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<StdRng>) -> io::Result<()> {
    let mut dirty = true;
    while !app.exit {
        let now = Instant::now();
        if dirty {
            terminal.draw(|f| app.render(f, now))?;
            dirty = false;
        }

        let timeout = app
            .engine
            .next_wakeup(now)
            .map_or(IDLE_POLL, |wakeup| wakeup.min(IDLE_POLL));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_command(input::command_for(key), Instant::now());
                    dirty = true;
                }
            } else {
                // Resize and friends
                dirty = true;
            }
        }

        // A running effect shows a countdown, so keep redrawing while it lasts.
        dirty |= app.engine.poll(Instant::now()) || app.engine.active_effect().is_some();
    }
    Ok(())
}
