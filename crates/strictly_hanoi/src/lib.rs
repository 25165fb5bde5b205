//! Strictly Hanoi - the three-peg disk-transfer puzzle with enforced rules
//!
//! This library holds the puzzle's logical model and nothing else: disk
//! stacks that refuse illegal pushes, the move legality rule, win detection
//! and the pointer-driven selection state machine. Drawing, audio and the
//! clock face are collaborators supplied by the host.
//!
//! # Architecture
//!
//! - **Board**: three [`Peg`]s of [`Disk`]s with fixed [`HitRegion`]s
//! - **Rules**: [`MoveValidator`], [`is_completed`], [`optimal_moves`]
//! - **Selection**: [`SelectionController`] turning [`Interaction`]s into moves
//! - **Session**: [`GameSession`] with move counter and play clock
//! - **Orchestrator**: binds a session to a [`Renderer`], [`ClockDisplay`]
//!   and [`AudioRequester`]
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{DiskCount, GameSession, Interaction, PegId};
//!
//! # fn example() -> Result<(), strictly_hanoi::HanoiError> {
//! let mut session = GameSession::new(DiskCount::new(1).expect("in range"));
//! session.handle_interaction(Interaction::PointerDown(Some(PegId::Left)))?;
//! session.handle_interaction(Interaction::PointerClick(Some(PegId::Left)))?;
//! session.handle_interaction(Interaction::PointerClick(Some(PegId::Right)))?;
//! assert!(session.is_completed());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod clock;
mod contracts;
mod disk;
mod error;
mod invariants;
mod layout;
mod orchestrator;
mod peg;
mod rules;
mod selection;
mod session;

// Crate-level exports - Data model
pub use board::{Board, Move};
pub use disk::Disk;
pub use layout::{BoardLayout, DiskRect, HitRegion, LayoutMetrics};
pub use peg::{Peg, PegId};

// Crate-level exports - Errors
pub use error::{DiskCountError, HanoiError};

// Crate-level exports - Rules
pub use rules::{MoveValidator, is_completed, optimal_moves};

// Crate-level exports - Selection state machine
pub use selection::{
    BackgroundClick, Interaction, Phase, Selection, SelectionAction, SelectionController,
};

// Crate-level exports - Session
pub use clock::{Elapsed, Stopwatch};
pub use session::{
    DEFAULT_DISKS, DiskCount, GameSession, MAX_DISKS, MIN_DISKS, Outcome, SessionStatus,
    SoundEffect,
};

// Crate-level exports - Collaborators
pub use orchestrator::{AudioRequester, ClockDisplay, Orchestrator, Renderer};

// Crate-level exports - Verification
pub use contracts::{Contract, MoveContract};
pub use invariants::{
    BoardInvariants, ConservedDisksInvariant, HanoiInvariants, Invariant, InvariantSet,
    InvariantViolation, OrderedStacksInvariant, SingleSelectionInvariant,
};
