//! Media binary preflight check.

use crate::models::config::MediaConfig;
use crate::services::process::{CommandRunner, Invocation};
use crate::Result;
use std::path::PathBuf;

/// Media binary found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedBinary {
    pub path: PathBuf,
    /// First line of `-version` output, or `unknown`.
    pub version: String,
}

/// Check that the media binary is installed and read its version.
pub fn check(runner: &dyn CommandRunner, config: &MediaConfig) -> Result<DetectedBinary> {
    let path = runner
        .locate(&config.binary)
        .ok_or_else(|| crate::Error::MissingExternalBinary {
            binary: config.binary.clone(),
        })?;

    let version = match runner.run(&Invocation::new(&path).arg("-version")) {
        Ok(outcome) if outcome.success => outcome
            .first_line()
            .map(str::to_string)
            .unwrap_or_else(|| "unknown".to_string()),
        _ => "unknown".to_string(),
    };

    Ok(DetectedBinary { path, version })
}
