//! Bounds-checked counter.
//!
//! The counter owns a single integer and decides whether proposed changes
//! are admissible. It reports outcomes and nothing else: no notifications,
//! no history, no logging. Those belong to the caller.

use super::bounds::{Bounds, Limit, Rejected};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a successful reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reset {
    /// The value the counter held before it was zeroed.
    pub previous_value: i64,
}

/// A reset requested while the counter already holds zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("counter is already zero")]
pub struct AlreadyZero;

/// Sign classification of a counter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    /// The value is zero.
    Initial,
    /// The value is above zero.
    Positive,
    /// The value is below zero.
    Negative,
}

impl Standing {
    pub fn of(value: i64) -> Self {
        match value {
            0 => Self::Initial,
            v if v > 0 => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// A single integer confined to [`Bounds`].
///
/// Every accepted transition keeps `bounds.min() <= value <= bounds.max()`;
/// a rejected one leaves the value exactly as it was.
///
/// # Example
///
/// ```rust
/// use tally::core::{Counter, Limit};
///
/// let mut counter = Counter::new();
/// assert_eq!(counter.increment_step(), Ok(1));
/// assert_eq!(counter.decrement_step(), Ok(0));
///
/// let rejected = counter.propose(1_000_000).unwrap_err();
/// assert_eq!(rejected.limit, Limit::Upper);
/// assert_eq!(counter.value(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    bounds: Bounds,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter {
    /// Create a counter at zero with the default bounds.
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Create a counter at zero confined to `bounds`.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self { value: 0, bounds }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn standing(&self) -> Standing {
        Standing::of(self.value)
    }

    /// Apply `delta` if the result stays within bounds.
    ///
    /// An addition that overflows `i64` crosses the bound on the side of the
    /// delta's sign.
    pub fn propose(&mut self, delta: i64) -> Result<i64, Rejected> {
        let candidate = match self.value.checked_add(delta) {
            Some(candidate) => self.bounds.admit(candidate)?,
            None if delta > 0 => return Err(self.bounds.rejection(Limit::Upper)),
            None => return Err(self.bounds.rejection(Limit::Lower)),
        };
        self.value = candidate;
        Ok(candidate)
    }

    pub fn increment_step(&mut self) -> Result<i64, Rejected> {
        self.propose(1)
    }

    pub fn decrement_step(&mut self) -> Result<i64, Rejected> {
        self.propose(-1)
    }

    /// Zero the counter unless it already is.
    pub fn reset_if_non_zero(&mut self) -> Result<Reset, AlreadyZero> {
        if self.value == 0 {
            return Err(AlreadyZero);
        }
        let previous_value = self.value;
        self.value = 0;
        Ok(Reset { previous_value })
    }
}
