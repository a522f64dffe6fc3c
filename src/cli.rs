//! Command-line definition

use clap::Parser;

#[derive(Parser)]
#[command(name = "astro", version, about = "Interactive schedule manager for timed astronaut tasks")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, env = "ASTRO_SCHEDULE_DEBUG")]
    pub debug: bool,

    /// Print the task list as JSON and exit instead of starting the shell
    #[arg(long)]
    pub json: bool,
}
