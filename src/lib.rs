//! Tally: a bounds-checked counter with an action history log
//!
//! Tally is built on Stillwater's "pure core, imperative shell" philosophy.
//! The counter and its history are plain values with pure transitions; the
//! notifications and confirmations around them are effects run against an
//! injected environment.
//!
//! # Core Concepts
//!
//! - **Counter**: a single integer confined to inclusive bounds
//! - **History**: an append-only log of accepted transitions with a bounded
//!   most-recent-first view
//! - **Session**: applies user actions, gates destructive ones behind a
//!   confirmation, and announces milestones, limits, and negative values
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Action, Counter, HistoryLog};
//! use chrono::Utc;
//!
//! let mut counter = Counter::new();
//! let mut history = HistoryLog::new();
//!
//! if let Ok(value) = counter.increment_step() {
//!     history.append(Action::Increment, value, Utc::now());
//! }
//!
//! assert_eq!(counter.value(), 1);
//! assert_eq!(history.recent_view(10)[0].resulting_value, 1);
//! ```

pub mod core;
pub mod effects;
pub mod settings;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{Action, Counter, HistoryLog, HistoryRecord};
pub use crate::effects::Session;
pub use crate::settings::Settings;
