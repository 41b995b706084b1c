//! Quran Video Setup CLI
//!
//! Checks prerequisites, provisions the virtual environment and installs the
//! video generator's dependencies.

use clap::Parser;
use quran_video_setup::cli::{args::Cli, commands::install};
use quran_video_setup::console::Console;
use quran_video_setup::models::config;
use quran_video_setup::services::SystemRunner;
use quran_video_setup::utils::fs::absolute_path;
use quran_video_setup::utils::platform::OsFamily;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let project_dir = match cli.project_dir {
        Some(dir) => absolute_path(&dir)?,
        None => std::env::current_dir()?,
    };

    let os = OsFamily::current();
    let mut console = Console::stdout();

    let config = match config::load_config(cli.config.as_deref(), &project_dir) {
        Ok(config) => config,
        Err(e) => {
            console.fail(&e.to_string());
            return Ok(exit_code(e.exit_code()));
        }
    };

    let runner = SystemRunner::new(&project_dir, &os.extra_search_dirs());

    match install::install(&runner, &config, &project_dir, &os, &mut console) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(exit_code(e.exit_code())),
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("quran_video_setup=debug")
    } else {
        EnvFilter::new("quran_video_setup=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
