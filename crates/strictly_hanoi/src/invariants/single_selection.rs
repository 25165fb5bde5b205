//! Single selection invariant: the highlight follows the controller.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: at most one disk is selected, and it is exactly the
/// controller's selection, on top of its origin peg.
pub struct SingleSelectionInvariant;

impl Invariant<GameSession> for SingleSelectionInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let selected: Vec<u8> = board
            .disks()
            .filter(|disk| disk.is_selected())
            .map(|disk| disk.id())
            .collect();

        match session.selection().selection() {
            None => selected.is_empty(),
            Some(sel) => {
                selected == [sel.disk]
                    && board.peg(sel.origin).top_disk().map(|d| d.id()) == Some(sel.disk)
            }
        }
    }

    fn description() -> &'static str {
        "At most one disk is selected and it matches the controller"
    }
}
