//! Astro Schedule - interactive schedule manager for timed astronaut tasks

use anyhow::Result;
use astro_schedule::cli::Cli;
use astro_schedule::schedule::{TaskEvent, TaskManager};
use astro_schedule::shell;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("astro_schedule=debug")
            .init();
    }

    let mut manager = TaskManager::new();

    // Machine-readable listing; empty for now since nothing persists
    if cli.json {
        println!("{}", serde_json::to_string(manager.tasks())?);
        return Ok(());
    }

    manager.subscribe(Box::new(|event: &TaskEvent| {
        if let Ok(json) = serde_json::to_string(event) {
            debug!(event = %json, "schedule event");
        }
    }));

    shell::run(manager)?;
    Ok(())
}
