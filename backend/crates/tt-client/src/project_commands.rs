use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Start the project's timer (stops any task timer in it)
    Start {
        /// Project ID (UUID)
        id: Uuid,
    },

    /// Stop the project's timer
    Stop {
        /// Project ID (UUID)
        id: Uuid,
    },

    /// Get a project snapshot
    Get {
        /// Project ID (UUID)
        id: Uuid,
    },

    /// List recorded intervals for the project and its tasks
    Entries {
        /// Project ID (UUID)
        id: Uuid,
    },

    /// Follow the timer until Ctrl+C
    Watch {
        /// Project ID (UUID)
        id: Uuid,
    },
}
