//! Conservation invariant: every disk is on the board exactly once.

use super::Invariant;
use crate::board::Board;
use crate::session::GameSession;

/// Invariant: the disk ids across all pegs are exactly `1..=num_disks`.
pub struct ConservedDisksInvariant;

impl Invariant<Board> for ConservedDisksInvariant {
    fn holds(board: &Board) -> bool {
        let mut ids: Vec<u8> = board.disks().map(|disk| disk.id()).collect();
        ids.sort_unstable();
        ids.iter().copied().eq(1..=board.num_disks())
    }

    fn description() -> &'static str {
        "Disks are conserved (each id on the board exactly once)"
    }
}

impl Invariant<GameSession> for ConservedDisksInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Board>>::holds(session.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
