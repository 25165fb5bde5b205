//! Wiring between a session and the collaborators that present it.
//!
//! The core never draws, plays audio or formats time itself. A host hands an
//! [`Orchestrator`] its renderer, clock display and audio requester, then
//! feeds it pointer interactions and clock ticks from a single event loop.

use crate::board::Board;
use crate::clock::Elapsed;
use crate::error::HanoiError;
use crate::selection::Interaction;
use crate::session::{DiskCount, GameSession, Outcome, SessionStatus, SoundEffect};
use std::time::Instant;
use tracing::{debug, instrument};

/// Draws the pegs and disks.
pub trait Renderer {
    /// Redraws every peg and disk, including the selection highlight.
    fn render(&mut self, board: &Board, move_count: u32);
}

/// Shows elapsed play time.
pub trait ClockDisplay {
    /// Updates the shown time.
    fn set_elapsed(&mut self, elapsed: Elapsed);
}

/// Plays sound effects without blocking the caller.
pub trait AudioRequester {
    /// Requests playback of an effect.
    fn request_playback(&mut self, effect: SoundEffect);
}

/// One session bound to its collaborators.
#[derive(Debug)]
pub struct Orchestrator<R, C, A> {
    session: GameSession,
    renderer: R,
    clock: C,
    audio: A,
}

impl<R, C, A> Orchestrator<R, C, A>
where
    R: Renderer,
    C: ClockDisplay,
    A: AudioRequester,
{
    /// Binds a session to its collaborators and draws the initial board.
    pub fn new(session: GameSession, renderer: R, clock: C, audio: A) -> Self {
        let mut orchestrator = Self {
            session,
            renderer,
            clock,
            audio,
        };
        orchestrator.render();
        orchestrator
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the clock display.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the audio requester.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Forwards an interaction at the current instant.
    ///
    /// # Errors
    ///
    /// Propagates internal rule breaches from the session.
    pub fn handle(&mut self, interaction: Interaction) -> Result<Outcome, HanoiError> {
        self.handle_at(interaction, Instant::now())
    }

    /// Forwards an interaction, redraws on change and requests its sounds.
    ///
    /// # Errors
    ///
    /// Propagates internal rule breaches from the session.
    #[instrument(skip(self, now))]
    pub fn handle_at(
        &mut self,
        interaction: Interaction,
        now: Instant,
    ) -> Result<Outcome, HanoiError> {
        let outcome = self.session.handle_interaction_at(interaction, now)?;
        if outcome.changes_board() {
            self.render();
        }
        for effect in outcome.sounds() {
            debug!(%effect, "Requesting playback");
            self.audio.request_playback(*effect);
        }
        Ok(outcome)
    }

    /// Pushes the elapsed time to the clock display while play is running.
    ///
    /// Returns the time shown, or `None` if the display was left alone.
    pub fn tick(&mut self, now: Instant) -> Option<Elapsed> {
        if self.session.status() == SessionStatus::Completed
            || !self.session.stopwatch().is_running()
        {
            return None;
        }
        let elapsed = self.session.elapsed(now);
        self.clock.set_elapsed(elapsed);
        Some(elapsed)
    }

    /// Starts over with `num_disks` disks.
    #[instrument(skip(self))]
    pub fn reset(&mut self, num_disks: DiskCount) {
        self.session.reset(num_disks);
        self.clock.set_elapsed(Elapsed::ZERO);
        self.render();
    }

    fn render(&mut self) {
        self.renderer
            .render(self.session.board(), self.session.move_count());
    }
}
