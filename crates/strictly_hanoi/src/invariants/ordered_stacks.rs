//! Ordered stacks invariant: no disk rests on a smaller one.

use super::Invariant;
use crate::board::Board;
use crate::session::GameSession;

/// Invariant: on every peg, disk ids strictly decrease from bottom to top.
pub struct OrderedStacksInvariant;

impl Invariant<Board> for OrderedStacksInvariant {
    fn holds(board: &Board) -> bool {
        board
            .pegs()
            .iter()
            .all(|peg| peg.disks().windows(2).all(|pair| pair[0].id() > pair[1].id()))
    }

    fn description() -> &'static str {
        "Stacks are ordered (no disk rests on a smaller one)"
    }
}

impl Invariant<GameSession> for OrderedStacksInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Board>>::holds(session.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::Disk;
    use crate::layout::LayoutMetrics;
    use crate::peg::PegId;

    #[test]
    fn test_initial_board_holds() {
        let board = Board::new(5, LayoutMetrics::default());
        assert!(<OrderedStacksInvariant as Invariant<Board>>::holds(&board));
    }

    #[test]
    fn test_spread_board_holds() {
        let mut board = Board::new(3, LayoutMetrics::default());
        board.transfer(PegId::Left, PegId::Right).unwrap();
        board.transfer(PegId::Left, PegId::Middle).unwrap();
        board.transfer(PegId::Right, PegId::Middle).unwrap();
        assert!(<OrderedStacksInvariant as Invariant<Board>>::holds(&board));
    }

    #[test]
    fn test_inverted_stack_violates() {
        let mut board = Board::new(2, LayoutMetrics::default());
        let _ = board.peg_mut(PegId::Left).pop().unwrap();
        board.peg_mut(PegId::Left).restore(Disk::new(3));
        assert!(!<OrderedStacksInvariant as Invariant<Board>>::holds(&board));
    }
}
