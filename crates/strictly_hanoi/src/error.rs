//! Error types for the puzzle core.
//!
//! None of these are reachable through the selection protocol: illegal
//! user moves are rejected silently by the state machine. A `HanoiError`
//! therefore always means a caller bypassed the move validator.

use crate::peg::PegId;
use crate::session::{MAX_DISKS, MIN_DISKS};

/// Internal rule breach on a peg stack.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HanoiError {
    /// A push would place a larger disk on a smaller one.
    #[display("Cannot push disk {} onto smaller disk {} on {}", disk, top, peg)]
    RuleViolation {
        /// Disk being pushed.
        disk: u8,
        /// Current top disk of the destination peg.
        top: u8,
        /// Destination peg.
        peg: PegId,
    },

    /// A pop on a peg with no disks.
    #[display("Cannot pop from empty {}", _0)]
    EmptyPeg(PegId),

    /// A postcondition check found a broken invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HanoiError {}

/// Requested disk count is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Disk count {} is outside the supported range {}..={}", requested, MIN_DISKS, MAX_DISKS)]
pub struct DiskCountError {
    /// The rejected value.
    pub requested: u8,
}

impl std::error::Error for DiskCountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_message_names_both_disks() {
        let err = HanoiError::RuleViolation {
            disk: 3,
            top: 1,
            peg: PegId::Middle,
        };
        let message = err.to_string();
        assert!(message.contains("disk 3"));
        assert!(message.contains("smaller disk 1"));
    }

    #[test]
    fn test_disk_count_error_reports_range() {
        let err = DiskCountError { requested: 42 };
        assert_eq!(
            err.to_string(),
            format!("Disk count 42 is outside the supported range {MIN_DISKS}..={MAX_DISKS}")
        );
    }
}
