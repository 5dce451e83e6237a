//! Session that mediates between the counter, the history log, and the
//! environment.

use crate::core::{
    Action, Cleared, Counter, HistoryLog, HistoryRecord, Rejected, Reset, DEFAULT_RECENT,
};
use crate::effects::env::{deliver, ConfirmationDialog, NotificationSink};
use crate::effects::notice::{Notification, Prompt};
use crate::effects::rules::NoticeRules;
use crate::settings::Settings;
use chrono::Utc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, info, trace, warn};

/// Outcome of a confirmation-gated reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The counter was zeroed and a `Reset` record appended.
    Reset(Reset),
    /// The counter already held zero; nothing was asked or changed.
    AlreadyZero,
    /// The user declined; nothing changed.
    Declined,
}

/// Outcome of a confirmation-gated history clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The log was emptied.
    Cleared(Cleared),
    /// The log was already empty; nothing was asked or changed.
    AlreadyEmpty,
    /// The user declined; nothing changed.
    Declined,
}

/// Owns one counter and one history log and applies user actions to them.
///
/// Counter and log never reference each other. The session runs each pure
/// transition, records accepted ones, and hands the resulting notifications
/// to the environment.
///
/// # Example
///
/// ```rust
/// use tally::effects::{ConfirmationDialog, NotificationSink, Notification, Prompt, Session};
///
/// #[derive(Clone)]
/// struct Quiet;
///
/// impl NotificationSink for Quiet {
///     fn notify(&self, _notice: &Notification) {}
/// }
///
/// impl ConfirmationDialog for Quiet {
///     async fn confirm(&self, _prompt: &Prompt) -> bool {
///         true
///     }
/// }
///
/// # tokio_test_block(async {
/// let mut session = Session::new();
/// session.increment(&Quiet).await.unwrap();
/// session.increment(&Quiet).await.unwrap();
/// assert_eq!(session.counter().value(), 2);
/// assert_eq!(session.history().len(), 2);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    counter: Counter,
    history: HistoryLog,
    rules: NoticeRules,
    recent: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with default bounds, rules, and recent-view length.
    pub fn new() -> Self {
        Self {
            counter: Counter::new(),
            history: HistoryLog::new(),
            rules: NoticeRules::default(),
            recent: DEFAULT_RECENT,
        }
    }

    /// Create a session from validated settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            counter: Counter::with_bounds(settings.counter.bounds()),
            history: HistoryLog::new(),
            rules: NoticeRules::new(settings.counter.milestone_every),
            recent: settings.history.recent,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Number of records the recent view shows.
    pub fn recent_len(&self) -> usize {
        self.recent
    }

    /// The display slice of the history, most recent first.
    pub fn recent(&self) -> Vec<&HistoryRecord> {
        self.history.recent_view(self.recent)
    }

    /// Add one, recording the step and announcing milestones.
    pub async fn increment<Env>(&mut self, env: &Env) -> Result<i64, Rejected>
    where
        Env: NotificationSink + Clone + Send + Sync + 'static,
    {
        match self.counter.increment_step() {
            Ok(value) => {
                self.history.append(Action::Increment, value, Utc::now());
                debug!(value, "counter incremented");
                let notices = self.rules.after_increment(value);
                self.announce(env, notices).await;
                Ok(value)
            }
            Err(rejected) => self.reject(env, rejected).await,
        }
    }

    /// Subtract one, recording the step and announcing negative values.
    pub async fn decrement<Env>(&mut self, env: &Env) -> Result<i64, Rejected>
    where
        Env: NotificationSink + Clone + Send + Sync + 'static,
    {
        match self.counter.decrement_step() {
            Ok(value) => {
                self.history.append(Action::Decrement, value, Utc::now());
                debug!(value, "counter decremented");
                let notices = self.rules.after_decrement(value);
                self.announce(env, notices).await;
                Ok(value)
            }
            Err(rejected) => self.reject(env, rejected).await,
        }
    }

    /// Zero the counter after the user confirms.
    ///
    /// The only suspension point is the confirmation, which happens before
    /// any mutation.
    pub async fn reset<Env>(&mut self, env: &Env) -> ResetOutcome
    where
        Env: NotificationSink + ConfirmationDialog + Clone + Send + Sync + 'static,
    {
        let current = self.counter.value();
        if current == 0 {
            self.announce(env, vec![Notification::already_zero()]).await;
            return ResetOutcome::AlreadyZero;
        }

        if !env.confirm(&Prompt::confirm_reset(current)).await {
            debug!(current, "reset declined");
            return ResetOutcome::Declined;
        }

        match self.counter.reset_if_non_zero() {
            Ok(reset) => {
                self.history.append(Action::Reset, 0, Utc::now());
                info!(previous = reset.previous_value, "counter reset");
                self.announce(env, vec![Notification::reset_done()]).await;
                ResetOutcome::Reset(reset)
            }
            Err(_) => ResetOutcome::AlreadyZero,
        }
    }

    /// Empty the history log after the user confirms.
    pub async fn clear_history<Env>(&mut self, env: &Env) -> ClearOutcome
    where
        Env: NotificationSink + ConfirmationDialog + Clone + Send + Sync + 'static,
    {
        if self.history.is_empty() {
            self.announce(env, vec![Notification::nothing_to_clear()])
                .await;
            return ClearOutcome::AlreadyEmpty;
        }

        let prompt = Prompt::confirm_clear(self.history.len());
        if !env.confirm(&prompt).await {
            debug!(records = self.history.len(), "clear declined");
            return ClearOutcome::Declined;
        }

        match self.history.clear_if_non_empty() {
            Ok(cleared) => {
                info!(count = cleared.count, "history cleared");
                self.announce(env, vec![Notification::history_cleared()])
                    .await;
                ClearOutcome::Cleared(cleared)
            }
            Err(_) => ClearOutcome::AlreadyEmpty,
        }
    }

    async fn reject<Env>(&self, env: &Env, rejected: Rejected) -> Result<i64, Rejected>
    where
        Env: NotificationSink + Clone + Send + Sync + 'static,
    {
        warn!(limit = %rejected.limit, bound = rejected.bound, "step rejected");
        self.announce(env, vec![Notification::limit_reached(&rejected)])
            .await;
        Err(rejected)
    }

    async fn announce<Env>(&self, env: &Env, notices: Vec<Notification>)
    where
        Env: NotificationSink + Clone + Send + Sync + 'static,
    {
        if notices.is_empty() {
            return;
        }
        match deliver(notices).run(env).await {
            Ok(count) => trace!(count, "notifications delivered"),
            Err(never) => match never {},
        }
    }
}
