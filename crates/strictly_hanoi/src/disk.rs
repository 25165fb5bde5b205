//! Disk tokens.

use serde::{Deserialize, Serialize};

/// A sized token identified by its id.
///
/// Id 1 is the smallest disk; a larger id is a physically larger disk.
/// Disks are created once per session and move between pegs by value,
/// so each one lives on exactly one stack at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    id: u8,
    selected: bool,
}

impl Disk {
    /// Creates an unselected disk.
    pub fn new(id: u8) -> Self {
        Self {
            id,
            selected: false,
        }
    }

    /// Returns the disk id.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns true while this disk is the current selection.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk[{}]", self.id)
    }
}
