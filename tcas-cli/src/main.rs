//! TCAS CLI - admission portfolios in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, logs, shell};

/// TCAS69 portfolio directory
#[derive(Parser)]
#[command(name = "tcas", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the portfolio shell (default)
    Shell {
        /// Start with sample portfolios regardless of settings
        #[arg(long)]
        demo: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and prune the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => shell::run(false),
        Some(Commands::Shell { demo }) => shell::run(demo),
        Some(Commands::Demo { command }) => demo::run(command),
        Some(Commands::Logs { command }) => logs::run(command),
    }
}
