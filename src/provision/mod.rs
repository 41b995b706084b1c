//! Virtual environment provisioning.
//!
//! Creates the environment if it is missing, activates it, upgrades pip and
//! installs the manifest. Any failing subcommand aborts the run; whatever was
//! already written to the environment directory stays there and the next run
//! picks it up.

pub mod context;

pub use context::ExecutionContext;

use crate::console::Console;
use crate::error::ProvisioningStep;
use crate::models::config::Config;
use crate::preflight::Prerequisites;
use crate::services::process::{CommandOutcome, CommandRunner, Invocation};
use crate::utils::fs::absolute_path;
use crate::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Create (or reuse), activate and populate the virtual environment.
pub fn provision_environment<W: Write>(
    runner: &dyn CommandRunner,
    config: &Config,
    project_dir: &Path,
    prerequisites: &Prerequisites,
    console: &mut Console<W>,
) -> Result<ExecutionContext> {
    let project_dir = absolute_path(project_dir)?;
    let project_dir = project_dir.as_path();
    let env_dir = project_dir.join(&config.environment.dir);

    let created = if env_dir.exists() {
        console.info(&format!(
            "Virtual environment already exists at {}",
            config.environment.dir.display()
        ));
        false
    } else {
        console.info(&format!(
            "Creating virtual environment at {}...",
            config.environment.dir.display()
        ));
        let create = Invocation::new(&prerequisites.runtime.path)
            .args(["-m", "venv"])
            .arg(env_dir.as_os_str())
            .current_dir(project_dir);
        run_step(runner, console, ProvisioningStep::Create, &create)?;
        console.ok("Virtual environment created");
        true
    };

    let ctx = ExecutionContext::activate(&env_dir, created).ok_or_else(|| {
        crate::Error::ProvisioningSubcommandFailure {
            step: ProvisioningStep::Activate,
            code: None,
            stderr: format!("no Python interpreter inside {}", env_dir.display()),
        }
    })?;
    debug!("Activated {} ({})", ctx.root.display(), ctx.python.display());
    console.info("Virtual environment activated");

    let search_path = runner.search_path();

    console.info("Upgrading pip...");
    let upgrade = ctx
        .command(&search_path)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .current_dir(project_dir);
    run_step(runner, console, ProvisioningStep::UpgradeInstaller, &upgrade)?;
    console.ok("pip upgraded");

    let manifest = project_dir.join(&config.environment.manifest);
    if !manifest.is_file() {
        return Err(crate::Error::ManifestNotFound(manifest));
    }

    console.info(&format!(
        "Installing dependencies from {}...",
        config.environment.manifest.display()
    ));
    let install = ctx
        .command(&search_path)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest.as_os_str())
        .current_dir(project_dir);
    run_step(runner, console, ProvisioningStep::InstallManifest, &install)?;
    console.ok("Dependencies installed");

    Ok(ctx)
}

/// Run one provisioning subcommand behind a spinner.
fn run_step<W: Write>(
    runner: &dyn CommandRunner,
    console: &Console<W>,
    step: ProvisioningStep,
    invocation: &Invocation,
) -> Result<CommandOutcome> {
    let pb = console.spinner(&format!("Running: {}", invocation.display()));
    let result = runner.run(invocation);
    pb.finish_and_clear();

    let outcome = result?;
    if !outcome.success {
        return Err(crate::Error::ProvisioningSubcommandFailure {
            step,
            code: outcome.code,
            stderr: outcome.stderr,
        });
    }

    Ok(outcome)
}
