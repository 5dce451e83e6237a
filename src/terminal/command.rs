//! Commands accepted by the interactive loop and `run` scripts.

use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Increment,
    Decrement,
    Reset,
    Clear,
    History,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown command '{0}' (try 'help')")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "inc" | "incrementar" => Ok(Self::Increment),
            "-" | "dec" | "decrementar" => Ok(Self::Decrement),
            "reset" | "reiniciar" => Ok(Self::Reset),
            "clear" | "limpiar" => Ok(Self::Clear),
            "history" | "historial" => Ok(Self::History),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}

pub const HELP: &str = "\
Comandos:
  +, inc        Incrementar en 1
  -, dec        Decrementar en 1
  reset         Reiniciar a cero (pide confirmación)
  clear         Limpiar historial (pide confirmación)
  history       Mostrar historial reciente
  show          Mostrar el panel
  help          Mostrar esta ayuda
  quit          Salir";
