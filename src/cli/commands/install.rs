//! Install command implementation.
//!
//! Runs preflight, provisioning and the completion report in order,
//! stopping at the first error.

use crate::console::Console;
use crate::models::config::Config;
use crate::preflight;
use crate::provision::{self, ExecutionContext};
use crate::report;
use crate::services::process::CommandRunner;
use crate::utils::platform::OsFamily;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Run the full setup. Failures are reported on the console before being
/// returned.
pub fn install<W: Write>(
    runner: &dyn CommandRunner,
    config: &Config,
    project_dir: &Path,
    os: &OsFamily,
    console: &mut Console<W>,
) -> Result<ExecutionContext> {
    match run_pipeline(runner, config, project_dir, os, console) {
        Ok(ctx) => Ok(ctx),
        Err(e) => {
            report::report_failure(&e, config, os, console);
            Err(e)
        }
    }
}

fn run_pipeline<W: Write>(
    runner: &dyn CommandRunner,
    config: &Config,
    project_dir: &Path,
    os: &OsFamily,
    console: &mut Console<W>,
) -> Result<ExecutionContext> {
    console.heading("Running preflight checks...");
    let prerequisites = preflight::check_prerequisites(runner, config, console)?;
    console.blank();

    console.heading("Setting up the Python environment...");
    let ctx =
        provision::provision_environment(runner, config, project_dir, &prerequisites, console)?;

    report::report_success(config, os, console);
    Ok(ctx)
}
