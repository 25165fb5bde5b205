//! Rules of the puzzle.
//!
//! Pure functions over board state, kept apart from peg storage so
//! contracts and invariants can compose them.

pub mod completion;
pub mod legality;

pub use completion::{is_completed, optimal_moves};
pub use legality::MoveValidator;
