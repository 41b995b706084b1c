//! Python interpreter preflight check.

use crate::models::config::RuntimeConfig;
use crate::models::version::RuntimeVersion;
use crate::services::process::{CommandRunner, Invocation};
use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Interpreter found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedRuntime {
    pub path: PathBuf,
    pub version: RuntimeVersion,
}

/// Locate the interpreter and verify its version against the minimum.
pub fn check(runner: &dyn CommandRunner, config: &RuntimeConfig) -> Result<DetectedRuntime> {
    let path = config
        .candidates
        .iter()
        .find_map(|name| runner.locate(name))
        .ok_or_else(|| crate::Error::RuntimeNotFound {
            candidates: config.candidates.clone(),
        })?;

    let outcome = runner.run(&Invocation::new(&path).arg("--version"))?;
    let reported = outcome.first_line().unwrap_or_default().to_string();
    debug!("{} reports: {}", path.display(), reported);

    let version = RuntimeVersion::from_output(&reported).ok_or_else(|| {
        crate::Error::UnrecognizedRuntimeVersion {
            interpreter: path.clone(),
            reported: reported.clone(),
        }
    })?;

    if !config.minimum.is_satisfied_by(&version) {
        return Err(crate::Error::IncompatibleRuntimeVersion {
            detected: version.short().to_string(),
            required: config.minimum.to_string(),
        });
    }

    Ok(DetectedRuntime { path, version })
}
