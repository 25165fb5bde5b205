//! First-class invariants for the puzzle.
//!
//! Invariants are logical properties that hold in every reachable state.
//! They are checked after moves in debug builds and tested independently.

pub mod conserved_disks;
pub mod ordered_stacks;
pub mod single_selection;

pub use conserved_disks::ConservedDisksInvariant;
pub use ordered_stacks::OrderedStacksInvariant;
pub use single_selection::SingleSelectionInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2)>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants that depend only on peg contents.
pub type BoardInvariants = (OrderedStacksInvariant, ConservedDisksInvariant);

/// Every session invariant as a composable set.
pub type HanoiInvariants = (
    OrderedStacksInvariant,
    ConservedDisksInvariant,
    SingleSelectionInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::disk::Disk;
    use crate::layout::LayoutMetrics;
    use crate::peg::PegId;
    use crate::selection::Interaction;
    use crate::session::{DiskCount, GameSession};

    #[test]
    fn test_board_set_holds_initially() {
        let board = Board::new(4, LayoutMetrics::default());
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_session_set_holds_after_moves() {
        let mut session = GameSession::new(DiskCount::new(3).unwrap());
        for interaction in [
            Interaction::PointerDown(Some(PegId::Left)),
            Interaction::PointerClick(Some(PegId::Left)),
            Interaction::PointerClick(Some(PegId::Right)),
            Interaction::PointerDown(Some(PegId::Left)),
            Interaction::PointerClick(Some(PegId::Left)),
        ] {
            session.handle_interaction(interaction).unwrap();
            assert!(HanoiInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_set_reports_single_violation() {
        let mut board = Board::new(3, LayoutMetrics::default());
        let one = board.peg_mut(PegId::Left).pop().unwrap();
        let two = board.peg_mut(PegId::Left).pop().unwrap();
        board.peg_mut(PegId::Left).restore(one);
        board.peg_mut(PegId::Left).restore(two);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <OrderedStacksInvariant as Invariant<Board>>::description()
        );
    }

    #[test]
    fn test_set_reports_every_violation() {
        let mut board = Board::new(3, LayoutMetrics::default());
        let _ = board.peg_mut(PegId::Left).pop().unwrap();
        let _ = board.peg_mut(PegId::Left).pop().unwrap();
        board.peg_mut(PegId::Left).restore(Disk::new(4));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
