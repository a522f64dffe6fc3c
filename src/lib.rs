//! Astro Schedule library - core functionality for the interactive schedule manager

pub mod cli;
pub mod schedule;
pub mod shell;
