//! Contract-based validation for moves.
//!
//! Contracts state the Hoare-style obligations around a transition:
//! {P(state, action)} action {Q(before, after)}.

use crate::board::{Board, Move};
use crate::error::HanoiError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::MoveValidator;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), HanoiError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), HanoiError>;
}

/// Contract for moving one disk.
///
/// Preconditions:
/// - the moving disk is on top of the source peg
/// - the move is legal
///
/// Postconditions:
/// - every stack stays ordered
/// - every disk is still on the board exactly once
/// - exactly one disk changed pegs
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    #[instrument(skip(board))]
    fn pre(board: &Board, mv: &Move) -> Result<(), HanoiError> {
        let source = board.peg(mv.from);
        let Some(top) = source.top_disk() else {
            return Err(HanoiError::EmptyPeg(mv.from));
        };
        if top.id() != mv.disk {
            return Err(HanoiError::InvariantViolation(format!(
                "Disk {} is not on top of {}",
                mv.disk, mv.from
            )));
        }
        if !MoveValidator::is_legal(board, mv.from, mv.to) {
            return Err(match board.peg(mv.to).top_disk() {
                Some(target) => HanoiError::RuleViolation {
                    disk: mv.disk,
                    top: target.id(),
                    peg: mv.to,
                },
                None => HanoiError::InvariantViolation(format!("Illegal move {mv}")),
            });
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &Board, after: &Board) -> Result<(), HanoiError> {
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            HanoiError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })?;

        let changed = before
            .pegs()
            .iter()
            .zip(after.pegs())
            .filter(|(b, a)| b.len() != a.len())
            .count();
        if changed != 2 {
            return Err(HanoiError::InvariantViolation(format!(
                "Expected two pegs to change height, found {changed}"
            )));
        }
        Ok(())
    }
}
