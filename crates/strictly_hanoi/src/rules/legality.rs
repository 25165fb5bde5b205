//! Move legality.

use crate::board::Board;
use crate::peg::PegId;
use tracing::instrument;

/// Decides whether the top disk of one peg may move onto another.
pub struct MoveValidator;

impl MoveValidator {
    /// Returns true if moving the top disk of `from` onto `to` is legal.
    ///
    /// A move is illegal onto the same peg or from an empty peg. Otherwise
    /// it is legal if `to` is empty or its top disk is strictly larger.
    #[instrument(skip(board))]
    pub fn is_legal(board: &Board, from: PegId, to: PegId) -> bool {
        if from == to {
            return false;
        }
        let Some(moving) = board.peg(from).top_disk() else {
            return false;
        };
        match board.peg(to).top_disk() {
            None => true,
            Some(target) => target.id() > moving.id(),
        }
    }
}
