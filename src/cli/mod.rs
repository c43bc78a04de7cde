pub mod inject;
pub mod remind;

use clap::{Parser, Subcommand};

use crate::reminder::Reminder;

#[derive(Parser)]
#[command(
    name = "context-hooks",
    version,
    about = "Keep CLAUDE.md references in place and emit prompt reminders"
)]
pub struct Cli {
    /// Defaults to `inject` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ensure every registered reference block exists exactly once in ./CLAUDE.md
    Inject {
        /// Report what would change without creating or writing the file
        #[arg(long)]
        dry_run: bool,

        /// Print the outcome as JSON instead of a status line
        #[arg(long)]
        json: bool,
    },

    /// Print a static reminder payload to stdout
    Remind {
        /// Payload to print
        #[arg(value_enum)]
        reminder: Reminder,
    },
}
