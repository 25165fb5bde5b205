//! Pegs and their ordered disk stacks.

use crate::disk::Disk;
use crate::error::HanoiError;
use crate::layout::HitRegion;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One of the three fixed peg positions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum PegId {
    /// Starting peg (1).
    #[strum(to_string = "peg 1")]
    Left,
    /// Spare peg (2).
    #[strum(to_string = "peg 2")]
    Middle,
    /// Final peg (3).
    #[strum(to_string = "peg 3")]
    Right,
}

impl PegId {
    /// All pegs in positional order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// 1-based positional number.
    pub fn number(self) -> u8 {
        match self {
            PegId::Left => 1,
            PegId::Middle => 2,
            PegId::Right => 3,
        }
    }

    /// 0-based index into a board's peg array.
    pub fn index(self) -> usize {
        usize::from(self.number()) - 1
    }

    /// Peg for a 1-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PegId::Left),
            2 => Some(PegId::Middle),
            3 => Some(PegId::Right),
            _ => None,
        }
    }
}

/// A peg holding a stack of disks, index 0 at the bottom.
///
/// Stack ids strictly decrease from bottom to top. [`Peg::push`] refuses
/// to break that ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    id: PegId,
    stack: Vec<Disk>,
    region: HitRegion,
}

impl Peg {
    /// Creates an empty peg with its fixed hit region.
    pub fn new(id: PegId, region: HitRegion) -> Self {
        Self {
            id,
            stack: Vec::new(),
            region,
        }
    }

    /// Returns the peg id.
    pub fn id(&self) -> PegId {
        self.id
    }

    /// Returns the disks bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.stack
    }

    /// Number of disks on the peg.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the top disk, if any.
    pub fn top_disk(&self) -> Option<&Disk> {
        self.stack.last()
    }

    pub(crate) fn top_disk_mut(&mut self) -> Option<&mut Disk> {
        self.stack.last_mut()
    }

    /// Returns the hit region used for pointer resolution.
    pub fn region(&self) -> &HitRegion {
        &self.region
    }

    /// Returns true if the point lies within this peg's hit region.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.region.contains(x, y)
    }

    /// Places a disk on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::RuleViolation`] if the disk is larger than the
    /// current top disk.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn push(&mut self, disk: Disk) -> Result<(), HanoiError> {
        if let Some(top) = self.stack.last()
            && disk.id() > top.id()
        {
            warn!(disk = disk.id(), top = top.id(), "Refusing push onto smaller disk");
            return Err(HanoiError::RuleViolation {
                disk: disk.id(),
                top: top.id(),
                peg: self.id,
            });
        }
        self.stack.push(disk);
        Ok(())
    }

    /// Removes and returns the top disk.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::EmptyPeg`] if there is nothing to pop.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn pop(&mut self) -> Result<Disk, HanoiError> {
        self.stack.pop().ok_or_else(|| {
            warn!("Refusing pop from empty peg");
            HanoiError::EmptyPeg(self.id)
        })
    }

    /// Places a disk without the ordering check, for undoing a pop or
    /// stacking the descending start position.
    pub(crate) fn restore(&mut self, disk: Disk) {
        self.stack.push(disk);
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg[{}]", self.id.number())
    }
}
