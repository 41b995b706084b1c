//! Preflight checks module.
//!
//! Checks run in order and stop at the first failure: interpreter version,
//! then the media binary. Nothing on disk is touched.

mod media;
mod runtime;

pub use media::DetectedBinary;
pub use runtime::DetectedRuntime;

use crate::console::Console;
use crate::models::config::Config;
use crate::services::process::CommandRunner;
use crate::Result;
use std::io::Write;

/// Everything the preflight checks found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisites {
    pub runtime: DetectedRuntime,
    pub media: DetectedBinary,
}

/// Verify the interpreter and media binary, reporting each success.
pub fn check_prerequisites<W: Write>(
    runner: &dyn CommandRunner,
    config: &Config,
    console: &mut Console<W>,
) -> Result<Prerequisites> {
    console.info(&format!(
        "Checking Python version (requires {} or higher)...",
        config.runtime.minimum
    ));
    let runtime = runtime::check(runner, &config.runtime)?;
    console.ok(&format!("Python {} detected", runtime.version));

    console.info(&format!("Checking for {}...", config.media.binary));
    let media = media::check(runner, &config.media)?;
    console.ok(&format!("{} found: {}", config.media.binary, media.version));

    Ok(Prerequisites { runtime, media })
}
