//! Completion detection.

use crate::board::Board;
use crate::peg::PegId;
use tracing::instrument;

/// Returns true once every disk sits on the final peg.
///
/// Disks are conserved, so counting the final peg's stack is enough.
#[instrument(skip(board))]
pub fn is_completed(board: &Board, num_disks: u8) -> bool {
    board.peg(PegId::Right).len() == usize::from(num_disks)
}

/// Fewest moves that can solve a tower of `num_disks` disks.
pub fn optimal_moves(num_disks: u8) -> u64 {
    1u64.checked_shl(u32::from(num_disks))
        .map_or(u64::MAX, |count| count - 1)
}
