//! Acctview CLI - account and balance responses in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use acctview_core::logging::{init_logging, LogConfig};

mod commands;
mod output;

use commands::{account, accounts, balance, demo};

/// Acctview - inspect account and balance responses
#[derive(Parser)]
#[command(name = "av", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List accounts, one page at a time
    Accounts {
        /// Page size (default 20, values above 100 are clamped)
        #[arg(long)]
        limit: Option<String>,
        /// Number of accounts to skip
        #[arg(long)]
        offset: Option<String>,
        /// Only show accounts with this status
        #[arg(long)]
        status: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single account
    Account {
        /// Account ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the latest balance of an account
    Balance {
        /// Account ID
        account_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr and stay quiet unless asked for
    if let Err(e) = init_logging(LogConfig::default().with_default_level("warn").merge_env()) {
        eprintln!("{}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Accounts { limit, offset, status, json } => {
            accounts::run(limit, offset, status, json)
        }
        Commands::Account { id, json } => account::run(&id, json),
        Commands::Balance { account_id, json } => balance::run(&account_id, json),
        Commands::Demo { command } => demo::run(command),
    }
}
