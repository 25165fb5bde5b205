//! Application state for the terminal frontend.

use crate::config::Settings;
use crate::input::Command;
use ratatui::layout::Rect;
use std::io::Write;
use std::time::Instant;
use strictly_hanoi::{
    AudioRequester, Board, ClockDisplay, Elapsed, GameSession, HanoiError, Orchestrator, PegId,
    Renderer, SoundEffect,
};
use tracing::{debug, info, instrument, warn};

/// Last frame handed over by the session, drawn on the next repaint.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    board: Option<Board>,
    move_count: u32,
}

impl FrameRenderer {
    /// Board to draw.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Move count to show.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

impl Renderer for FrameRenderer {
    fn render(&mut self, board: &Board, move_count: u32) {
        self.board = Some(board.clone());
        self.move_count = move_count;
    }
}

/// Time shown in the status bar.
#[derive(Debug, Default)]
pub struct StatusClock {
    shown: Elapsed,
}

impl StatusClock {
    /// Currently shown time.
    pub fn shown(&self) -> Elapsed {
        self.shown
    }
}

impl ClockDisplay for StatusClock {
    fn set_elapsed(&mut self, elapsed: Elapsed) {
        self.shown = elapsed;
    }
}

/// Sound output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// Rings the terminal bell.
    Bell,
    /// Logs requests only.
    Silent,
}

impl AudioRequester for Speaker {
    fn request_playback(&mut self, effect: SoundEffect) {
        match self {
            Speaker::Bell => {
                let mut stdout = std::io::stdout();
                if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
                    warn!(error = %e, %effect, "Failed to ring terminal bell");
                }
            }
            Speaker::Silent => debug!(%effect, "Sound muted"),
        }
    }
}

/// Application state.
pub struct App {
    orchestrator: Orchestrator<FrameRenderer, StatusClock, Speaker>,
    board_area: Option<Rect>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh session.
    pub fn new(settings: &Settings) -> Self {
        let session = GameSession::with_options(
            *settings.disks(),
            *settings.metrics(),
            *settings.background_click(),
        );
        let speaker = if *settings.sound() {
            Speaker::Bell
        } else {
            Speaker::Silent
        };
        Self {
            orchestrator: Orchestrator::new(
                session,
                FrameRenderer::default(),
                StatusClock::default(),
                speaker,
            ),
            board_area: None,
            should_quit: false,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        self.orchestrator.session()
    }

    /// Returns the last rendered frame.
    pub fn frame(&self) -> &FrameRenderer {
        self.orchestrator.renderer()
    }

    /// Time shown in the status bar.
    pub fn elapsed(&self) -> Elapsed {
        self.orchestrator.clock().shown()
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Resolves a terminal cell to the peg drawn there.
    pub fn resolve(&self, column: u16, row: u16) -> Option<PegId> {
        let area = self.board_area?;
        if !area.contains((column, row).into()) {
            return None;
        }
        let x = i32::from(column) - i32::from(area.x);
        let y = i32::from(row) - i32::from(area.y);
        self.session().board().peg_at(x, y)
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Fails only if the session reports an internal rule breach.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, command: Command, now: Instant) -> Result<(), HanoiError> {
        match command {
            Command::Interact(interaction) => {
                self.orchestrator.handle_at(interaction, now)?;
            }
            Command::MoreDisks => match self.session().num_disks().increment() {
                Some(count) => self.orchestrator.reset(count),
                None => debug!("Already at the largest disk count"),
            },
            Command::FewerDisks => match self.session().num_disks().decrement() {
                Some(count) => self.orchestrator.reset(count),
                None => debug!("Already at the smallest disk count"),
            },
            Command::Reset => {
                let count = self.session().num_disks();
                self.orchestrator.reset(count);
            }
            Command::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Advances the status bar clock.
    pub fn tick(&mut self, now: Instant) {
        self.orchestrator.tick(now);
    }
}
