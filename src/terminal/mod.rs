//! Terminal front end: command parsing, rendering, and a terminal
//! environment for the session.

mod command;
mod env;
pub mod render;

pub use command::{Command, UnknownCommand, HELP};
pub use env::{ConfirmMode, TerminalEnv};
