//! Pointer-driven selection state machine.
//!
//! A pointer source delivers a `PointerDown` followed by a `PointerClick`
//! for every press-and-release. The first press on a disk arms the
//! selection so that its own click is absorbed instead of cancelling it.
//! Sources that only emit clicks (keyboard taps) select straight into
//! [`Phase::Selected`].

use crate::board::{Board, Move};
use crate::contracts::{Contract, MoveContract};
use crate::error::HanoiError;
use crate::peg::PegId;
use crate::rules::MoveValidator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Raw pointer event, carrying the peg under the pointer if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    /// Pointer pressed.
    PointerDown(Option<PegId>),
    /// Pointer released over the surface.
    PointerClick(Option<PegId>),
}

impl Interaction {
    /// Returns the peg under the pointer.
    pub fn peg(&self) -> Option<PegId> {
        match self {
            Interaction::PointerDown(peg) | Interaction::PointerClick(peg) => *peg,
        }
    }
}

/// What a click outside every peg does to an active selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackgroundClick {
    /// The selection persists until a peg is clicked.
    #[default]
    Keep,
    /// The selection is cancelled.
    Cancel,
}

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing selected.
    Idle,
    /// A disk was just selected by a press whose click is still pending.
    Armed,
    /// A disk is selected and waiting for a target.
    Selected,
}

/// The selected disk and the peg it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Id of the selected disk.
    pub disk: u8,
    /// Peg the disk was selected from.
    pub origin: PegId,
}

/// Effect of one interaction on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAction {
    /// Nothing happened.
    Ignored,
    /// A press selected a disk and armed the selection.
    Armed(Selection),
    /// A click selected a disk directly.
    Selected(Selection),
    /// The click following an arming press was absorbed.
    Disarmed(Selection),
    /// The selection was cancelled.
    Deselected(Selection),
    /// The target peg cannot take the disk; the selection persists.
    Rejected {
        /// The still-active selection.
        selection: Selection,
        /// The refused target.
        target: PegId,
    },
    /// The selected disk moved.
    Moved(Move),
}

impl SelectionAction {
    /// Returns true if peg contents or the selection highlight changed.
    pub fn changes_board(&self) -> bool {
        matches!(
            self,
            SelectionAction::Armed(_)
                | SelectionAction::Selected(_)
                | SelectionAction::Deselected(_)
                | SelectionAction::Moved(_)
        )
    }

    /// Returns the move, if one was made.
    pub fn moved(&self) -> Option<Move> {
        match self {
            SelectionAction::Moved(mv) => Some(*mv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Armed(Selection),
    Selected(Selection),
}

/// Converts pointer events into select, deselect and move actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    state: State,
    background_click: BackgroundClick,
}

impl SelectionController {
    /// Creates an idle controller.
    pub fn new(background_click: BackgroundClick) -> Self {
        Self {
            state: State::Idle,
            background_click,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Armed(_) => Phase::Armed,
            State::Selected(_) => Phase::Selected,
        }
    }

    /// Returns the active selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            State::Idle => None,
            State::Armed(sel) | State::Selected(sel) => Some(sel),
        }
    }

    /// Returns the background click policy.
    pub fn background_click(&self) -> BackgroundClick {
        self.background_click
    }

    /// Applies one interaction to the board.
    ///
    /// # Errors
    ///
    /// Only fails if a legal move is refused by the pegs, which means the
    /// board was corrupted outside this controller.
    #[instrument(skip(self, board), fields(phase = ?self.phase()))]
    pub fn handle(
        &mut self,
        board: &mut Board,
        interaction: Interaction,
    ) -> Result<SelectionAction, HanoiError> {
        let action = match (self.state, interaction) {
            (State::Idle, Interaction::PointerDown(peg)) => self.select(board, peg, true),
            (State::Idle, Interaction::PointerClick(peg)) => self.select(board, peg, false),
            (State::Armed(_) | State::Selected(_), Interaction::PointerDown(_)) => {
                SelectionAction::Ignored
            }
            (State::Armed(sel), Interaction::PointerClick(peg)) => match peg {
                Some(to) if MoveValidator::is_legal(board, sel.origin, to) => {
                    self.execute(board, sel, to)?
                }
                _ => {
                    self.state = State::Selected(sel);
                    SelectionAction::Disarmed(sel)
                }
            },
            (State::Selected(sel), Interaction::PointerClick(Some(to))) => {
                if MoveValidator::is_legal(board, sel.origin, to) {
                    self.execute(board, sel, to)?
                } else if to == sel.origin
                    && board.peg(to).top_disk().map(|d| d.id()) == Some(sel.disk)
                {
                    self.deselect(board, sel)
                } else {
                    debug!(disk = sel.disk, target = %to, "Target refused, selection persists");
                    SelectionAction::Rejected {
                        selection: sel,
                        target: to,
                    }
                }
            }
            (State::Selected(sel), Interaction::PointerClick(None)) => {
                match self.background_click {
                    BackgroundClick::Keep => SelectionAction::Ignored,
                    BackgroundClick::Cancel => self.deselect(board, sel),
                }
            }
        };
        debug!(?action, phase = ?self.phase(), "Interaction handled");
        Ok(action)
    }

    fn select(&mut self, board: &mut Board, peg: Option<PegId>, armed: bool) -> SelectionAction {
        let Some(origin) = peg else {
            return SelectionAction::Ignored;
        };
        let Some(disk) = board.peg_mut(origin).top_disk_mut() else {
            return SelectionAction::Ignored;
        };
        disk.set_selected(true);
        let sel = Selection {
            disk: disk.id(),
            origin,
        };
        if armed {
            self.state = State::Armed(sel);
            SelectionAction::Armed(sel)
        } else {
            self.state = State::Selected(sel);
            SelectionAction::Selected(sel)
        }
    }

    fn deselect(&mut self, board: &mut Board, sel: Selection) -> SelectionAction {
        if let Some(disk) = board.peg_mut(sel.origin).top_disk_mut() {
            disk.set_selected(false);
        }
        self.state = State::Idle;
        SelectionAction::Deselected(sel)
    }

    fn execute(
        &mut self,
        board: &mut Board,
        sel: Selection,
        to: PegId,
    ) -> Result<SelectionAction, HanoiError> {
        let mv = Move {
            disk: sel.disk,
            from: sel.origin,
            to,
        };
        #[cfg(debug_assertions)]
        let before = board.clone();

        MoveContract::pre(board, &mv)?;
        let mv = board.transfer(sel.origin, to)?;
        if let Some(disk) = board.peg_mut(to).top_disk_mut() {
            disk.set_selected(false);
        }
        self.state = State::Idle;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, board)?;

        info!(%mv, "Disk moved");
        Ok(SelectionAction::Moved(mv))
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(BackgroundClick::default())
    }
}
