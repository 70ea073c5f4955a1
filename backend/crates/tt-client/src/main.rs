//! tt - time tracking CLI
//!
//! # Examples
//!
//! ```bash
//! # Start a task timer
//! tt task start <uuid> --pretty
//!
//! # Stop it with a note
//! tt task stop <uuid> --description "Reviewed PR"
//!
//! # Follow a project timer live
//! tt project watch <uuid>
//! ```

mod cli;
mod commands;
mod project_commands;
mod task_commands;

use crate::{
    cli::Cli, commands::Commands, project_commands::ProjectCommands, task_commands::TaskCommands,
};

use tt_client::{
    Client, ClientResult, ClientTimerSource, PollerSettings, ReconciliationPoller, TimerTarget,
};
use tt_core::{Clock, SystemClock};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match tt_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    // Explicit flag > configured server address
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.bind_addr()));

    let client = Client::new(&server_url, cli.account_id.as_deref());

    let settings = PollerSettings::from(&config.poller);

    let result = match cli.command {
        Commands::Task { action } => match action {
            TaskCommands::Start { id } => to_json(client.start_task(id).await),
            TaskCommands::Stop { id, description } => {
                to_json(client.stop_task(id, description.as_deref()).await)
            }
            TaskCommands::Get { id } => to_json(client.get_task(id).await),
            TaskCommands::Entries { id } => to_json(client.list_task_time_entries(id).await),
            TaskCommands::Move { id, project_id } => {
                to_json(client.move_task(id, project_id).await)
            }
            TaskCommands::Watch { id } => {
                return watch(client, TimerTarget::Task(id), settings).await;
            }
        },
        Commands::Project { action } => match action {
            ProjectCommands::Start { id } => to_json(client.start_project(id).await),
            ProjectCommands::Stop { id } => to_json(client.stop_project(id).await),
            ProjectCommands::Get { id } => to_json(client.get_project(id).await),
            ProjectCommands::Entries { id } => {
                to_json(client.list_project_time_entries(id).await)
            }
            ProjectCommands::Watch { id } => {
                return watch(client, TimerTarget::Project(id), settings).await;
            }
        },
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: Serialize>(result: ClientResult<T>) -> ClientResult<serde_json::Value> {
    Ok(serde_json::to_value(result?)?)
}

/// Print the live timer once per change until Ctrl+C
async fn watch(client: Client, target: TimerTarget, settings: PollerSettings) -> ExitCode {
    let source = ClientTimerSource::new(client, target);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let handle = ReconciliationPoller::new(source, clock)
        .with_settings(settings)
        .spawn();
    let mut updates = handle.subscribe();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    eprintln!("Error: poller stopped");
                    return ExitCode::FAILURE;
                }
                let state = updates.borrow_and_update().clone();
                let label = state
                    .snapshot
                    .as_ref()
                    .map(|view| view.label().to_string())
                    .unwrap_or_default();
                let status = if state.is_tracking { "tracking" } else { "idle" };
                let elapsed = state.formatted_elapsed();
                match &state.last_error {
                    Some(error) => println!("{} {} [{}] ({})", elapsed, label, status, error),
                    None => println!("{} {} [{}]", elapsed, label, status),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.shutdown().await;
    ExitCode::SUCCESS
}
