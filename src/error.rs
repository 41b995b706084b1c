//! Error types for the setup tool.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Provisioning step that ran a subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningStep {
    Create,
    Activate,
    UpgradeInstaller,
    InstallManifest,
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProvisioningStep::Create => "create virtual environment",
            ProvisioningStep::Activate => "activate virtual environment",
            ProvisioningStep::UpgradeInstaller => "upgrade pip",
            ProvisioningStep::InstallManifest => "install requirements",
        };
        f.write_str(name)
    }
}

/// Main error type for the setup tool.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("Python {detected} is not compatible. Python {required} or higher is required.")]
    IncompatibleRuntimeVersion { detected: String, required: String },

    #[error("Python not found (looked for: {})", .candidates.join(", "))]
    RuntimeNotFound { candidates: Vec<String> },

    #[error("Could not read Python version from {}: {reported}", .interpreter.display())]
    UnrecognizedRuntimeVersion {
        interpreter: PathBuf,
        reported: String,
    },

    #[error("{binary} is not installed.")]
    MissingExternalBinary { binary: String },

    // Provisioning errors
    #[error(
        "Failed to {step}{}",
        .code.map(|c| format!(" (exit code {})", c)).unwrap_or_default()
    )]
    ProvisioningSubcommandFailure {
        step: ProvisioningStep,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Dependency manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// A failed subcommand passes its own nonzero status through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ProvisioningSubcommandFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_message() {
        let err = Error::IncompatibleRuntimeVersion {
            detected: "3.6".to_string(),
            required: "3.8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Python 3.6 is not compatible. Python 3.8 or higher is required."
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_subcommand_exit_code_passthrough() {
        let err = Error::ProvisioningSubcommandFailure {
            step: ProvisioningStep::InstallManifest,
            code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Failed to install requirements (exit code 2)");

        let killed = Error::ProvisioningSubcommandFailure {
            step: ProvisioningStep::Create,
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(killed.to_string(), "Failed to create virtual environment");
    }
}
