//! The three pegs together with their layout.

use crate::disk::Disk;
use crate::error::HanoiError;
use crate::layout::{BoardLayout, LayoutMetrics};
use crate::peg::{Peg, PegId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Relocation of one disk between pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Id of the disk that moved.
    pub disk: u8,
    /// Peg the disk left.
    pub from: PegId,
    /// Peg the disk landed on.
    pub to: PegId,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Three pegs in positional order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: [Peg; 3],
    layout: BoardLayout,
}

impl Board {
    /// Builds the starting position: every disk on peg 1, largest at the bottom.
    #[instrument]
    pub fn new(num_disks: u8, metrics: LayoutMetrics) -> Self {
        let layout = BoardLayout::new(metrics, num_disks);
        let mut pegs = PegId::ALL.map(|id| Peg::new(id, layout.peg_region(id)));
        for id in (1..=num_disks).rev() {
            pegs[0].restore(Disk::new(id));
        }
        Self { pegs, layout }
    }

    /// Returns the peg with the given id.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub(crate) fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.index()]
    }

    /// Returns all pegs in positional order.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Returns the layout the pegs were built with.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Number of disks in play.
    pub fn num_disks(&self) -> u8 {
        self.layout.num_disks()
    }

    /// Resolves a point to the peg whose hit region contains it.
    pub fn peg_at(&self, x: i32, y: i32) -> Option<PegId> {
        self.pegs
            .iter()
            .find(|peg| peg.contains_point(x, y))
            .map(Peg::id)
    }

    /// Moves the top disk of `from` onto `to`.
    ///
    /// Callers check legality first; the peg operations only guard the
    /// stack ordering.
    #[instrument(skip(self))]
    pub(crate) fn transfer(&mut self, from: PegId, to: PegId) -> Result<Move, HanoiError> {
        let disk = self.peg_mut(from).pop()?;
        let id = disk.id();
        if let Err(e) = self.peg_mut(to).push(disk.clone()) {
            // A refused push must never lose the disk.
            self.peg_mut(from).restore(disk);
            return Err(e);
        }
        Ok(Move { disk: id, from, to })
    }

    /// Iterates every disk on the board.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        self.pegs.iter().flat_map(|peg| peg.disks().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stack_on_first_peg() {
        let board = Board::new(3, LayoutMetrics::default());
        let ids: Vec<u8> = board.peg(PegId::Left).disks().iter().map(Disk::id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(board.peg(PegId::Middle).is_empty());
        assert!(board.peg(PegId::Right).is_empty());
    }

    #[test]
    fn test_largest_board_stacks_every_disk() {
        let board = Board::new(10, LayoutMetrics::cells());
        let ids: Vec<u8> = board.peg(PegId::Left).disks().iter().map(Disk::id).collect();
        assert_eq!(ids, (1..=10).rev().collect::<Vec<u8>>());
    }

    #[test]
    fn test_peg_at_resolves_regions() {
        let board = Board::new(3, LayoutMetrics::pixels());
        assert_eq!(board.peg_at(60, 50), Some(PegId::Left));
        assert_eq!(board.peg_at(160, 50), Some(PegId::Middle));
        assert_eq!(board.peg_at(260, 50), Some(PegId::Right));
        assert_eq!(board.peg_at(110, 50), None);
        assert_eq!(board.peg_at(60, 5), None);
    }

    #[test]
    fn test_transfer_moves_top_disk() {
        let mut board = Board::new(2, LayoutMetrics::default());
        let mv = board.transfer(PegId::Left, PegId::Right).unwrap();
        assert_eq!(
            mv,
            Move {
                disk: 1,
                from: PegId::Left,
                to: PegId::Right
            }
        );
        assert_eq!(board.peg(PegId::Right).top_disk().map(Disk::id), Some(1));
    }

    #[test]
    fn test_refused_transfer_keeps_disk() {
        let mut board = Board::new(2, LayoutMetrics::default());
        board.transfer(PegId::Left, PegId::Right).unwrap();
        let result = board.transfer(PegId::Left, PegId::Right);
        assert!(matches!(result, Err(HanoiError::RuleViolation { disk: 2, top: 1, .. })));
        assert_eq!(board.peg(PegId::Left).top_disk().map(Disk::id), Some(2));
        assert_eq!(board.disks().count(), 2);
    }

    #[test]
    fn test_transfer_from_empty_peg() {
        let mut board = Board::new(1, LayoutMetrics::default());
        assert_eq!(
            board.transfer(PegId::Middle, PegId::Right),
            Err(HanoiError::EmptyPeg(PegId::Middle))
        );
    }
}
