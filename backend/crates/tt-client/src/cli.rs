use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tt")]
#[command(about = "Task and project time tracking CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the configured server host and port)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Account ID to act as (the server's default account if omitted)
    #[arg(long, global = true)]
    pub(crate) account_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
