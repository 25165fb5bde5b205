//! Elapsed play time.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Whole minutes and seconds of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Elapsed {
    /// Whole minutes.
    pub minutes: u64,
    /// Remaining seconds (0-59).
    pub seconds: u8,
}

impl Elapsed {
    /// Zero elapsed time.
    pub const ZERO: Elapsed = Elapsed {
        minutes: 0,
        seconds: 0,
    };
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        let total = duration.as_secs();
        Self {
            minutes: total / 60,
            // Always below 60.
            seconds: (total % 60) as u8,
        }
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Start-once stopwatch driven by caller-supplied instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    /// Creates a stopwatch that has not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing at `now` unless already started.
    ///
    /// Returns true if this call started the stopwatch.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Freezes the elapsed time at `now`. No effect unless running.
    pub fn stop(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_at = Some(now);
        }
    }

    /// Returns the instant timing began.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Returns true between start and stop.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    /// Time since start, frozen once stopped.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.started_at, self.stopped_at) {
            (None, _) => Duration::ZERO,
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            (Some(start), None) => now.saturating_duration_since(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_formats_two_digits() {
        assert_eq!(Elapsed::from(Duration::from_secs(0)).to_string(), "00:00");
        assert_eq!(Elapsed::from(Duration::from_secs(9)).to_string(), "00:09");
        assert_eq!(Elapsed::from(Duration::from_secs(75)).to_string(), "01:15");
        assert_eq!(Elapsed::from(Duration::from_millis(59_999)).to_string(), "00:59");
    }

    #[test]
    fn test_unstarted_stopwatch_reads_zero() {
        let watch = Stopwatch::new();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_start_only_once() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        assert!(watch.start(t0));
        assert!(!watch.start(t0 + Duration::from_secs(5)));
        assert_eq!(watch.started_at(), Some(t0));
        assert_eq!(watch.elapsed(t0 + Duration::from_secs(7)), Duration::from_secs(7));
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start(t0);
        watch.stop(t0 + Duration::from_secs(3));
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(t0 + Duration::from_secs(60)), Duration::from_secs(3));
    }

    #[test]
    fn test_stop_before_start_is_ignored() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.stop(t0);
        assert!(watch.start(t0));
        assert!(watch.is_running());
    }
}
