use crate::{project_commands::ProjectCommands, task_commands::TaskCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Task timer operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Project timer operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}
