//! Counter state engine.
//!
//! This module contains the pure functional core:
//! - Bounds and the bounds-checked counter
//! - The append-only action history log
//! - Guard predicates used to derive notifications
//!
//! Nothing in this module notifies, prompts, or logs. Those effects live in
//! [`crate::effects`], following the "pure core, imperative shell" philosophy.

mod bounds;
mod counter;
mod guard;
mod history;

pub use bounds::{Bounds, Limit, Rejected, MAX, MIN};
pub use counter::{AlreadyZero, Counter, Reset, Standing};
pub use guard::Guard;
pub use history::{Action, AlreadyEmpty, Cleared, HistoryLog, HistoryRecord, DEFAULT_RECENT};
