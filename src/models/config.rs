//! Configuration model.

use super::version::RuntimeVersion;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "setup.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interpreter requirements.
    pub runtime: RuntimeConfig,
    /// Media-processing binary.
    pub media: MediaConfig,
    /// Virtual environment layout.
    pub environment: EnvironmentConfig,
    /// Instructions printed after a successful install.
    pub next_steps: NextStepsConfig,
}

/// Interpreter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Executable names to look up, in order of preference.
    pub candidates: Vec<String>,
    /// Minimum supported version.
    pub minimum: RuntimeVersion,
}

/// Media binary configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Executable name.
    pub binary: String,
}

/// Virtual environment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment directory, relative to the project directory.
    pub dir: PathBuf,
    /// Dependency manifest, relative to the project directory.
    pub manifest: PathBuf,
}

/// An external service the user needs an API key for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyReference {
    pub service: String,
    pub url: String,
}

/// Completion instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextStepsConfig {
    pub api_keys: Vec<ApiKeyReference>,
    pub commands: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            candidates: vec!["python3".to_string(), "python".to_string()],
            minimum: RuntimeVersion::new(3, 8),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("venv"),
            manifest: PathBuf::from("requirements.txt"),
        }
    }
}

impl Default for NextStepsConfig {
    fn default() -> Self {
        Self {
            api_keys: vec![
                ApiKeyReference {
                    service: "Pexels".to_string(),
                    url: "https://www.pexels.com/api/".to_string(),
                },
                ApiKeyReference {
                    service: "OpenAI".to_string(),
                    url: "https://platform.openai.com/api-keys".to_string(),
                },
            ],
            commands: vec![
                "python -m ipykernel install --user --name quran-video".to_string(),
                "jupyter notebook main.ipynb".to_string(),
            ],
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quran_video_setup")
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;

    if config.runtime.candidates.is_empty() {
        return Err(crate::Error::Config(
            "runtime.candidates must not be empty".to_string(),
        ));
    }
    if config.media.binary.trim().is_empty() {
        return Err(crate::Error::Config(
            "media.binary must not be empty".to_string(),
        ));
    }

    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist. Otherwise the project's `setup.toml` is used,
/// then the user config directory, then the defaults.
pub fn load_config(explicit: Option<&Path>, project_dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(crate::Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return load_file(path);
    }

    let candidates = [
        project_dir.join(PROJECT_CONFIG_FILE),
        dirs_config_path().join("config.toml"),
    ];

    for path in candidates.iter() {
        if path.is_file() {
            return load_file(path);
        }
    }

    debug!("No config file found, using defaults");
    Ok(Config::default())
}

fn load_file(path: &Path) -> Result<Config> {
    debug!("Loading config from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_config(&content).map_err(|e| match e {
        crate::Error::Config(msg) => crate::Error::Config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.runtime.candidates, vec!["python3", "python"]);
        assert_eq!(config.runtime.minimum.to_string(), "3.8");
        assert_eq!(config.media.binary, "ffmpeg");
        assert_eq!(config.environment.dir, PathBuf::from("venv"));
        assert_eq!(config.environment.manifest, PathBuf::from("requirements.txt"));
        assert_eq!(config.next_steps.api_keys.len(), 2);
        assert_eq!(config.next_steps.commands.len(), 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
[runtime]
minimum = "3.10"

[environment]
dir = ".venv"
"#,
        )
        .unwrap();

        assert_eq!(config.runtime.minimum, RuntimeVersion::new(3, 10));
        assert_eq!(config.runtime.candidates, vec!["python3", "python"]);
        assert_eq!(config.environment.dir, PathBuf::from(".venv"));
        assert_eq!(config.environment.manifest, PathBuf::from("requirements.txt"));
        assert_eq!(config.media.binary, "ffmpeg");
    }

    #[test]
    fn test_invalid_minimum_rejected() {
        let err = parse_config("[runtime]\nminimum = \"latest\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let err = parse_config("[runtime]\ncandidates = []\n").unwrap_err();
        assert!(err.to_string().contains("runtime.candidates"));
    }

    #[test]
    fn test_load_project_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "[media]\nbinary = \"avconv\"\n",
        )
        .unwrap();

        let config = load_config(None, temp_dir.path()).unwrap();
        assert_eq!(config.media.binary, "avconv");
    }

    #[test]
    fn test_explicit_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = load_config(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
