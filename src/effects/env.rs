//! Environment capabilities the session depends on.
//!
//! The session never talks to a terminal or a dialog directly. It is generic
//! over an environment implementing these traits, so production code and
//! tests supply different implementations.

use crate::effects::notice::{Notification, Prompt};
use std::convert::Infallible;
use std::future::Future;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Receives fire-and-forget notifications.
pub trait NotificationSink {
    fn notify(&self, notice: &Notification);
}

/// Asks the user a yes/no question and waits for the answer.
///
/// `true` means confirmed, `false` declined. Once shown, a prompt cannot be
/// cancelled other than by declining.
pub trait ConfirmationDialog {
    fn confirm(&self, prompt: &Prompt) -> impl Future<Output = bool>;
}

/// Deliver notifications through the environment's sink.
///
/// Returns the number of notifications delivered. Delivery cannot fail.
pub fn deliver<Env>(
    notices: Vec<Notification>,
) -> impl Effect<Output = usize, Error = Infallible, Env = Env>
where
    Env: NotificationSink + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        for notice in &notices {
            env.notify(notice);
        }
        Ok(notices.len())
    })
}
