//! Quill CLI
//!
//! Builds e-signature envelopes from a PDF and a list of signers, and sends
//! them through `DocuSign`.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

/// Quill CLI — send documents for signature.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "QUILL_CONFIG", default_value = "quill.toml", global = true)]
    config: PathBuf,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an envelope and send it for signature.
    Send(commands::send::SendArgs),
    /// List the accounts the configured user can send from.
    Accounts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Send(ref args) => commands::send::run(&cli.config, args, &cli.format).await,
        Command::Accounts => commands::accounts::run(&cli.config, &cli.format).await,
    }
}
