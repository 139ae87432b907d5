//! Absolute deadlines threaded explicitly through every port call.
//!
//! A [`Deadline`] is never extended by a callee: each layer derives its own
//! budget with [`Deadline::within`], which keeps whichever instant comes
//! first, the inherited one or `now + ceiling`.

use std::fmt;
use std::time::{Duration, Instant};

/// An absolute point in time by which an operation must complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(Instant);

impl Deadline {
    /// Deadline at an exact instant.
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self::after_from(Instant::now(), budget)
    }

    fn after_from(start: Instant, budget: Duration) -> Self {
        // Saturate far-future budgets instead of panicking on overflow.
        match start.checked_add(budget) {
            Some(instant) => Self(instant),
            None => Self(start + Duration::from_secs(60 * 60 * 24 * 365)),
        }
    }

    /// Tightens this deadline to at most `ceiling` from now.
    pub fn within(self, ceiling: Duration) -> Self {
        self.earliest(Self::after(ceiling))
    }

    /// Returns whichever deadline expires first.
    pub fn earliest(self, other: Deadline) -> Self {
        std::cmp::min(self, other)
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.0
    }

    pub fn instant(&self) -> Instant {
        self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms remaining", self.remaining().as_millis())
    }
}
