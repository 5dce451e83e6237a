//! Effectful session operations using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! applying user actions to the counter and history, asking for
//! confirmation before destructive actions, and delivering notifications.
//!
//! # Key Concepts
//!
//! - **Environment**: capabilities (`NotificationSink`, `ConfirmationDialog`)
//!   injected into every session operation
//! - **Rules**: pure guards deciding which notifications a step calls for
//! - **Session**: mediates between counter, history, and environment
//! - **Effects**: notification delivery runs as a Stillwater effect

mod env;
mod notice;
mod rules;
mod session;

pub use env::{deliver, ConfirmationDialog, NotificationSink};
pub use notice::{group_thousands, NoticeKind, Notification, Prompt};
pub use rules::{NoticeRules, DEFAULT_MILESTONE_EVERY};
pub use session::{ClearOutcome, ResetOutcome, Session};
