//! Tally terminal counter.
//!
//! ```bash
//! # Interactive session
//! tally
//!
//! # Scripted session, auto-confirming prompts, history as JSON
//! tally --yes run --json + + + reset
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tally::effects::{ClearOutcome, ResetOutcome, Session};
use tally::terminal::{render, Command, ConfirmMode, TerminalEnv, HELP};
use tally::Settings;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Tally - a bounded counter with an action history.
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Confirm every prompt without asking.
    #[arg(long, global = true, conflicts_with = "no")]
    yes: bool,

    /// Decline every prompt without asking.
    #[arg(long, global = true)]
    no: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin until `quit` (default).
    Interactive,

    /// Apply a sequence of commands, then print the result.
    Run {
        /// Commands to apply in order (`+`, `-`, `reset`, `clear`, ...).
        #[arg(required = true)]
        actions: Vec<String>,

        /// Print the full history log as JSON instead of the panel.
        #[arg(long)]
        json: bool,
    },
}

/// What the caller should do after a command.
enum Flow {
    Redraw,
    Continue,
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    let mode = if cli.yes {
        ConfirmMode::AssumeYes
    } else if cli.no {
        ConfirmMode::AssumeNo
    } else {
        ConfirmMode::Ask
    };
    let mut session = Session::from_settings(&settings);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => interactive(&mut session, &TerminalEnv::new(mode)).await,
        Commands::Run { actions, json } => {
            // Keep stdout clean for the JSON document.
            let env = TerminalEnv::new(mode).with_stderr(json);
            run(&mut session, &env, &actions, json).await
        }
    }
}

async fn interactive(session: &mut Session, env: &TerminalEnv) -> Result<()> {
    println!("{}", style("🧮 Contador Digital").bold());
    println!("{}", render::panel(session));
    println!("{}", style("Escribe 'help' para ver los comandos.").dim());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match line.parse::<Command>() {
            Ok(command) => match apply(session, env, command).await {
                Flow::Redraw => println!("{}", render::panel(session)),
                Flow::Continue => {}
                Flow::Quit => break,
            },
            Err(err) => eprintln!("{}", style(err).red()),
        }
    }
    Ok(())
}

async fn run(
    session: &mut Session,
    env: &TerminalEnv,
    actions: &[String],
    json: bool,
) -> Result<()> {
    let commands = actions
        .iter()
        .map(|action| action.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()?;

    for command in commands {
        if let Flow::Quit = apply(session, env, command).await {
            break;
        }
    }

    if json {
        let text = serde_json::to_string_pretty(session.history())
            .context("serializing history")?;
        println!("{text}");
    } else {
        println!("{}", render::panel(session));
        println!("{}", render::history(session));
    }
    Ok(())
}

async fn apply(session: &mut Session, env: &TerminalEnv, command: Command) -> Flow {
    match command {
        Command::Increment => {
            let _ = session.increment(env).await;
        }
        Command::Decrement => {
            let _ = session.decrement(env).await;
        }
        Command::Reset => {
            if let ResetOutcome::Declined = session.reset(env).await {
                env.emit(style("Reinicio cancelado").dim());
            }
        }
        Command::Clear => {
            if let ClearOutcome::Declined = session.clear_history(env).await {
                env.emit(style("Limpieza cancelada").dim());
            }
        }
        Command::History => {
            env.emit(render::history(session));
            return Flow::Continue;
        }
        Command::Show => {}
        Command::Help => {
            env.emit(HELP);
            return Flow::Continue;
        }
        Command::Quit => {
            debug!(value = session.counter().value(), "leaving session");
            return Flow::Quit;
        }
    }
    Flow::Redraw
}
