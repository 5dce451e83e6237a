//! Action history tracking.
//!
//! An append-only, insertion-ordered log of accepted counter transitions,
//! with a bounded most-recent-first view for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of records shown by default in the recent view.
pub const DEFAULT_RECENT: usize = 10;

/// Kind of accepted transition a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
}

impl Action {
    /// Get the action's name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::Reset => "Reset",
        }
    }
}

/// Record of a single accepted transition.
///
/// Records are immutable values: what happened, the value right after it,
/// and when.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, HistoryRecord};
/// use chrono::Utc;
///
/// let record = HistoryRecord {
///     action: Action::Increment,
///     resulting_value: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.action.name(), "Increment");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// What kind of transition was accepted
    pub action: Action,
    /// The counter value immediately after the action
    pub resulting_value: i64,
    /// When the action was captured
    pub timestamp: DateTime<Utc>,
}

/// Outcome of clearing a non-empty log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cleared {
    /// How many records were removed.
    pub count: usize,
}

/// A clear requested while the log holds no records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("history is already empty")]
pub struct AlreadyEmpty;

/// Ordered log of accepted transitions.
///
/// Storage is unbounded; only [`HistoryLog::recent_view`] is bounded. Records
/// are never reordered and are only ever removed all at once.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, HistoryLog};
/// use chrono::Utc;
///
/// let mut log = HistoryLog::new();
/// log.append(Action::Increment, 1, Utc::now());
/// log.append(Action::Increment, 2, Utc::now());
/// log.append(Action::Decrement, 1, Utc::now());
///
/// let recent = log.recent_view(2);
/// assert_eq!(recent.len(), 2);
/// assert_eq!(recent[0].action, Action::Decrement); // most recent first
/// assert_eq!(recent[1].resulting_value, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add one record to the end of the log.
    pub fn append(&mut self, action: Action, resulting_value: i64, timestamp: DateTime<Utc>) {
        self.records.push(HistoryRecord {
            action,
            resulting_value,
            timestamp,
        });
    }

    /// Get up to the last `n` records, most recent first.
    ///
    /// Asking for more records than the log holds returns the whole log.
    pub fn recent_view(&self, n: usize) -> Vec<&HistoryRecord> {
        let start = self.records.len().saturating_sub(n);
        self.records[start..].iter().rev().collect()
    }

    /// Remove every record, reporting how many there were.
    pub fn clear_if_non_empty(&mut self) -> Result<Cleared, AlreadyEmpty> {
        if self.records.is_empty() {
            return Err(AlreadyEmpty);
        }
        let count = self.records.len();
        self.records.clear();
        Ok(Cleared { count })
    }

    /// Get all records in append order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
