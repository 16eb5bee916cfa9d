//! `tripbook` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Run exactly one core command against the stored address book; the
//!   load, execute, render and save steps live in `execute`.

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tripbook_core::{init_logging, open_db};

mod cli;
mod execute;
mod render;
mod translate;

fn main() {
    if let Err(error) = run() {
        eprintln!("tripbook error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.config();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let command = translate::to_command(cli.command)?;

    ensure_parent_dir(&config.data_file)?;
    let mut conn = open_db(&config.data_file)
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;
    let report = execute::run_command(&mut conn, command.as_ref())?;
    print!("{}", report.output);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
