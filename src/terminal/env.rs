//! Terminal implementation of the session environment.

use crate::effects::{ConfirmationDialog, NoticeKind, Notification, NotificationSink, Prompt};
use crate::terminal::render;
use console::style;
use dialoguer::Confirm;
use std::fmt::Display;
use tracing::warn;

/// How confirmation prompts are answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Ask on the terminal.
    Ask,
    /// Confirm every prompt without asking.
    AssumeYes,
    /// Decline every prompt without asking.
    AssumeNo,
}

/// Prints notifications and asks confirmations on the terminal.
///
/// Output goes to stdout unless the env was built `with_stderr(true)`.
#[derive(Clone, Debug)]
pub struct TerminalEnv {
    mode: ConfirmMode,
    stderr: bool,
}

impl TerminalEnv {
    pub fn new(mode: ConfirmMode) -> Self {
        Self {
            mode,
            stderr: false,
        }
    }

    pub fn with_stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    pub fn mode(&self) -> ConfirmMode {
        self.mode
    }

    /// Print one line of session output.
    pub fn emit(&self, text: impl Display) {
        if self.stderr {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
}

impl NotificationSink for TerminalEnv {
    fn notify(&self, notice: &Notification) {
        let text = render::notice(notice);
        let styled = match notice.kind {
            NoticeKind::Success => style(text).green(),
            NoticeKind::Warning => style(text).yellow(),
            NoticeKind::Error => style(text).red().bold(),
            NoticeKind::Info | NoticeKind::Question => style(text).cyan(),
        };
        self.emit(styled);
    }
}

impl ConfirmationDialog for TerminalEnv {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        let question = format!("{} {}\n   {}", prompt.kind.icon(), prompt.title, prompt.text);
        match self.mode {
            ConfirmMode::AssumeYes => {
                self.emit(format!("{question} {}", style("[sí]").dim()));
                true
            }
            ConfirmMode::AssumeNo => {
                self.emit(format!("{question} {}", style("[no]").dim()));
                false
            }
            ConfirmMode::Ask => {
                let answer = tokio::task::spawn_blocking(move || {
                    Confirm::new()
                        .with_prompt(question)
                        .default(false)
                        .interact()
                })
                .await;
                match answer {
                    Ok(Ok(confirmed)) => confirmed,
                    Ok(Err(err)) => {
                        warn!(%err, "confirmation prompt failed, treating as declined");
                        false
                    }
                    Err(err) => {
                        warn!(%err, "confirmation task failed, treating as declined");
                        false
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assumed_answers_skip_the_terminal() {
        let prompt = Prompt::confirm_reset(5);

        assert!(TerminalEnv::new(ConfirmMode::AssumeYes).confirm(&prompt).await);
        assert!(!TerminalEnv::new(ConfirmMode::AssumeNo).confirm(&prompt).await);
    }

    #[test]
    fn stderr_flag_is_kept() {
        let env = TerminalEnv::new(ConfirmMode::AssumeNo).with_stderr(true);
        assert_eq!(env.mode(), ConfirmMode::AssumeNo);
        assert!(env.stderr);
    }
}
