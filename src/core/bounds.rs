//! Inclusive numeric limits for the counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest value the counter may hold by default.
pub const MIN: i64 = -999_999;

/// Largest value the counter may hold by default.
pub const MAX: i64 = 999_999;

/// Which side of the bounds a rejected change would have crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Limit {
    /// The candidate was above `max`.
    Upper,
    /// The candidate was below `min`.
    Lower,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// A proposed change that would have left the bounds.
///
/// Carries the limit that was hit and its numeric value so the caller can
/// tell the user what the boundary is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value would cross the {limit} bound {bound}")]
pub struct Rejected {
    pub limit: Limit,
    pub bound: i64,
}

/// Closed interval `[min, max]` a counter is confined to.
///
/// # Example
///
/// ```rust
/// use tally::core::{Bounds, Limit};
///
/// let bounds = Bounds::default();
/// assert_eq!(bounds.admit(999_999), Ok(999_999));
///
/// let rejected = bounds.admit(1_000_000).unwrap_err();
/// assert_eq!(rejected.limit, Limit::Upper);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: MIN, max: MAX }
    }
}

impl Bounds {
    /// Create bounds without checking them.
    ///
    /// Callers building bounds from user input go through settings
    /// validation first, which rejects `min >= max` and ranges without zero.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Check whether `value` lies inside the bounds (pure).
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Admit a candidate value or report the limit it crosses (pure).
    pub fn admit(&self, candidate: i64) -> Result<i64, Rejected> {
        if candidate > self.max {
            Err(self.rejection(Limit::Upper))
        } else if candidate < self.min {
            Err(self.rejection(Limit::Lower))
        } else {
            Ok(candidate)
        }
    }

    /// Build the rejection for a given side.
    pub fn rejection(&self, limit: Limit) -> Rejected {
        let bound = match limit {
            Limit::Upper => self.max,
            Limit::Lower => self.min,
        };
        Rejected { limit, bound }
    }
}
