//! Completion and failure reporting.

use crate::console::Console;
use crate::models::config::Config;
use crate::utils::platform::OsFamily;
use crate::Error;
use colored::Colorize;
use std::io::Write;

/// Lines of subprocess stderr echoed after a provisioning failure.
const STDERR_TAIL_LINES: usize = 10;

/// Print the next-step instructions after a successful install.
pub fn report_success<W: Write>(config: &Config, os: &OsFamily, console: &mut Console<W>) {
    let env_dir = config.environment.dir.display().to_string();

    console.blank();
    console.ok(&"Setup complete!".bold().to_string());
    console.blank();
    console.heading("[Next Steps]");
    console.line(&format!(
        "  1. Activate the virtual environment: {}",
        os.activation_command(&env_dir).cyan()
    ));

    let mut step = 2;
    for reference in &config.next_steps.api_keys {
        console.line(&format!(
            "  {}. Get a {} API key: {}",
            step,
            reference.service,
            reference.url.cyan()
        ));
        step += 1;
    }

    console.line(&format!("  {}. Then run:", step));
    for command in &config.next_steps.commands {
        console.line(&format!("       {}", command.cyan()));
    }
}

/// Print a failure with remediation hints where there are any.
pub fn report_failure<W: Write>(
    error: &Error,
    config: &Config,
    os: &OsFamily,
    console: &mut Console<W>,
) {
    console.fail(&error.to_string());

    match error {
        Error::IncompatibleRuntimeVersion { required, .. } => {
            console.hint(&format!("Install Python {} or newer and re-run setup.", required));
        }
        Error::RuntimeNotFound { .. } => {
            for line in os.runtime_guidance() {
                console.hint(&line);
            }
        }
        Error::UnrecognizedRuntimeVersion { interpreter, .. } => {
            console.hint(&format!(
                "Check that `{} --version` works in this shell.",
                interpreter.display()
            ));
        }
        Error::MissingExternalBinary { binary } => {
            for line in os.install_guidance(binary) {
                console.hint(&line);
            }
            console.hint("Re-run setup once it is installed.");
        }
        Error::ProvisioningSubcommandFailure { stderr, .. } => {
            let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
            let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
            for line in &lines[start..] {
                console.line(&format!("     {}", line));
            }
            console.hint(&format!(
                "Fix the problem above and re-run setup; the existing {} directory is reused.",
                config.environment.dir.display()
            ));
        }
        Error::ManifestNotFound(_) => {
            console.hint("Run setup from the project directory containing the manifest.");
        }
        Error::Config(_) | Error::Io(_) => {}
    }
}
