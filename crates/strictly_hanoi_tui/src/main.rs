//! Terminal UI for Strictly Hanoi

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::Settings;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    init_logging(settings.log_file())?;

    info!(
        disks = %settings.disks(),
        sound = settings.sound(),
        background_click = %settings.background_click(),
        "Starting Strictly Hanoi"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal_io()?;
            return Err(e.into());
        }
    };

    let res = run_app(&mut terminal, App::new(&settings)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Strictly Hanoi exited");
    res
}

/// Sets up logging to a file so it does not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn restore_terminal_io() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Event loop: one terminal event or clock tick at a time.
#[instrument(skip_all)]
async fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| {
            let area = ui::draw(frame, &app);
            app.set_board_area(area);
        })?;

        if app.should_quit() {
            return Ok(());
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Some(command) = input::map_event(&event, |column, row| app.resolve(column, row)) {
                        debug!(?command, "Command");
                        app.apply(command, Instant::now())?;
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => {
                    info!("Terminal event stream closed");
                    return Ok(());
                }
            },
            _ = tick.tick() => {
                app.tick(Instant::now());
            }
        }
    }
}
