use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mailprep",
    about = "Validate addresses, prepare messages and dispatch per-recipient copies"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Walk through the message lifecycle with sample data
    Demo,
    /// Check addresses and print their normalized and masked forms
    Check {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Compose a message and dispatch one copy per recipient
    Send {
        /// Sender address (default: delivery.default_sender from config)
        #[arg(long)]
        from: Option<String>,
        /// Recipient address, repeatable
        #[arg(long = "to", required = true)]
        to: Vec<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}
