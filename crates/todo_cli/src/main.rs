//! Console entry point for the task tracker.
//!
//! # Responsibility
//! - Load env configuration and start file logging.
//! - Run one interactive session over stdin/stdout.

mod app;
mod config;

use anyhow::Context;
use app::App;
use config::CliConfig;
use log::info;
use std::io;
use todo_core::{core_version, init_logging, TaskService};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        // The session still works without file logs.
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(TaskService::in_memory(), stdin.lock(), stdout.lock());
    app.run().context("console session failed")?;

    let service = app.into_service();
    info!(
        "event=cli_exit module=cli status=ok tasks={}",
        service.repository().len()
    );
    Ok(())
}
