use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Start the task's timer (stops its project's timer)
    Start {
        /// Task ID (UUID)
        id: Uuid,
    },

    /// Stop the task's timer
    Stop {
        /// Task ID (UUID)
        id: Uuid,
        /// Note for the recorded interval
        #[arg(long)]
        description: Option<String>,
    },

    /// Get a task snapshot
    Get {
        /// Task ID (UUID)
        id: Uuid,
    },

    /// List recorded intervals, newest first
    Entries {
        /// Task ID (UUID)
        id: Uuid,
    },

    /// Move the task to another project
    Move {
        /// Task ID (UUID)
        id: Uuid,
        /// Target project ID; omit to detach the task
        #[arg(long)]
        project_id: Option<Uuid>,
    },

    /// Follow the timer until Ctrl+C
    Watch {
        /// Task ID (UUID)
        id: Uuid,
    },
}
