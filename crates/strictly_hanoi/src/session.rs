//! Game session: pegs, move counter and play clock.

use crate::board::Board;
use crate::clock::{Elapsed, Stopwatch};
use crate::error::{DiskCountError, HanoiError};
use crate::invariants::{HanoiInvariants, InvariantSet};
use crate::layout::LayoutMetrics;
use crate::rules;
use crate::selection::{BackgroundClick, Interaction, SelectionAction, SelectionController};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Fewest disks a session accepts.
pub const MIN_DISKS: u8 = 1;
/// Most disks a session accepts.
pub const MAX_DISKS: u8 = 10;
/// Disk count used when none is configured.
pub const DEFAULT_DISKS: u8 = 3;

/// Validated number of disks in a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{}", _0)]
pub struct DiskCount(u8);

impl DiskCount {
    /// Validates a disk count.
    ///
    /// # Errors
    ///
    /// Returns [`DiskCountError`] outside `MIN_DISKS..=MAX_DISKS`.
    pub fn new(requested: u8) -> Result<Self, DiskCountError> {
        if (MIN_DISKS..=MAX_DISKS).contains(&requested) {
            Ok(Self(requested))
        } else {
            Err(DiskCountError { requested })
        }
    }

    /// Returns the count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One more disk, if still in range.
    pub fn increment(self) -> Option<Self> {
        Self::new(self.0.checked_add(1)?).ok()
    }

    /// One fewer disk, if still in range.
    pub fn decrement(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?).ok()
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self(DEFAULT_DISKS)
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = DiskCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

/// Sound a session asks its host to play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum SoundEffect {
    /// A disk moved.
    #[strum(serialize = "move-sound")]
    Move,
    /// The tower reached the final peg.
    #[strum(serialize = "completion-sound")]
    Completion,
}

/// Terminal status flag of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Every disk is on the final peg; no further moves.
    Completed,
}

/// What one interaction did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Outcome {
    /// Effect on the selection and pegs.
    action: SelectionAction,
    /// Sounds to request, in order.
    sounds: Vec<SoundEffect>,
    /// True if this interaction started the play clock.
    clock_started: bool,
    /// True if this interaction completed the puzzle.
    completed: bool,
}

impl Outcome {
    fn ignored() -> Self {
        Self {
            action: SelectionAction::Ignored,
            sounds: Vec::new(),
            clock_started: false,
            completed: false,
        }
    }

    /// Returns true if the board needs redrawing.
    pub fn changes_board(&self) -> bool {
        self.action.changes_board()
    }
}

/// One play-through of the puzzle.
///
/// Owns all pegs and disks. Independent sessions share nothing.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    num_disks: DiskCount,
    metrics: LayoutMetrics,
    move_count: u32,
    stopwatch: Stopwatch,
    selection: SelectionController,
    status: SessionStatus,
}

impl GameSession {
    /// Creates a session with pixel layout and the default background policy.
    pub fn new(num_disks: DiskCount) -> Self {
        Self::with_options(num_disks, LayoutMetrics::default(), BackgroundClick::default())
    }

    /// Creates a session with explicit layout and background click policy.
    #[instrument]
    pub fn with_options(
        num_disks: DiskCount,
        metrics: LayoutMetrics,
        background_click: BackgroundClick,
    ) -> Self {
        info!(%num_disks, "Creating game session");
        Self {
            board: Board::new(num_disks.get(), metrics),
            num_disks,
            metrics,
            move_count: 0,
            stopwatch: Stopwatch::new(),
            selection: SelectionController::new(background_click),
            status: SessionStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the disk count fixed at creation.
    pub fn num_disks(&self) -> DiskCount {
        self.num_disks
    }

    /// Returns the number of moves made.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the selection controller.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Returns the terminal status flag.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the play clock.
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Elapsed play time at `now`, frozen once completed.
    pub fn elapsed(&self, now: Instant) -> Elapsed {
        self.stopwatch.elapsed(now).into()
    }

    /// Returns true once every disk is on the final peg.
    pub fn is_completed(&self) -> bool {
        rules::is_completed(&self.board, self.num_disks.get())
    }

    /// Fewest moves that solve this session.
    pub fn optimal_moves(&self) -> u64 {
        rules::optimal_moves(self.num_disks.get())
    }

    /// Handles one pointer interaction at the current instant.
    ///
    /// # Errors
    ///
    /// Fails only on an internal rule breach; see [`HanoiError`].
    pub fn handle_interaction(&mut self, interaction: Interaction) -> Result<Outcome, HanoiError> {
        self.handle_interaction_at(interaction, Instant::now())
    }

    /// Handles one pointer interaction at `now`.
    ///
    /// # Errors
    ///
    /// Fails only on an internal rule breach; see [`HanoiError`].
    #[instrument(skip(self, now), fields(moves = self.move_count))]
    pub fn handle_interaction_at(
        &mut self,
        interaction: Interaction,
        now: Instant,
    ) -> Result<Outcome, HanoiError> {
        if self.status == SessionStatus::Completed {
            debug!("Session completed, ignoring interaction");
            return Ok(Outcome::ignored());
        }

        let clock_started = interaction.peg().is_some() && self.stopwatch.start(now);
        if clock_started {
            info!("Play clock started");
        }

        let action = self.selection.handle(&mut self.board, interaction)?;
        let mut sounds = Vec::new();
        let mut completed = false;

        if let Some(mv) = action.moved() {
            self.move_count += 1;
            sounds.push(SoundEffect::Move);
            debug!(%mv, moves = self.move_count, "Move counted");

            if self.is_completed() {
                self.stopwatch.stop(now);
                self.status = SessionStatus::Completed;
                sounds.push(SoundEffect::Completion);
                completed = true;
                info!(
                    moves = self.move_count,
                    optimal = self.optimal_moves(),
                    elapsed = %self.elapsed(now),
                    "Puzzle completed"
                );
            }
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(Outcome {
            action,
            sounds,
            clock_started,
            completed,
        })
    }

    /// Discards all state and restacks `num_disks` disks on peg 1.
    #[instrument(skip(self))]
    pub fn reset(&mut self, num_disks: DiskCount) {
        info!(%num_disks, previous = %self.num_disks, "Resetting session");
        *self = Self::with_options(num_disks, self.metrics, self.selection.background_click());
    }

    /// Verifies every session invariant.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::InvariantViolation`] listing the broken invariants.
    pub fn check_invariants(&self) -> Result<(), HanoiError> {
        HanoiInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HanoiError::InvariantViolation(descriptions)
        })
    }
}
