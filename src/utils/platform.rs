//! Operating-system family detection and install guidance.

use std::path::PathBuf;

/// Homebrew prefix on Apple Silicon, not always on a login shell's PATH.
const HOMEBREW_BIN: &str = "/opt/homebrew/bin";

/// Operating-system family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Family of the running system.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name (as in `std::env::consts::OS`) to a family.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" | "darwin" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            other => OsFamily::Other(other.to_string()),
        }
    }

    /// Directories to search in addition to `PATH`.
    pub fn extra_search_dirs(&self) -> Vec<PathBuf> {
        match self {
            OsFamily::MacOs => vec![PathBuf::from(HOMEBREW_BIN)],
            _ => Vec::new(),
        }
    }

    /// How to install a missing binary.
    pub fn install_guidance(&self, binary: &str) -> Vec<String> {
        match self {
            OsFamily::MacOs => vec![
                format!("Install {} with Homebrew:", binary),
                format!("brew install {}", binary),
            ],
            OsFamily::Linux => vec![
                format!("Install {} with your package manager:", binary),
                format!("sudo apt update && sudo apt install {}", binary),
            ],
            OsFamily::Other(_) => vec![
                format!("Please install {} manually:", binary),
                format!("Download {} from https://ffmpeg.org/download.html", binary),
            ],
        }
    }

    /// How to install Python.
    pub fn runtime_guidance(&self) -> Vec<String> {
        match self {
            OsFamily::MacOs => vec!["brew install python3".to_string()],
            OsFamily::Linux => {
                vec!["sudo apt update && sudo apt install python3 python3-venv".to_string()]
            }
            OsFamily::Other(_) => {
                vec!["Download Python from https://www.python.org/downloads/".to_string()]
            }
        }
    }

    /// Shell command that activates a virtual environment.
    pub fn activation_command(&self, env_dir: &str) -> String {
        match self {
            OsFamily::Other(name) if name == "windows" => {
                format!("{}\\Scripts\\activate", env_dir)
            }
            _ => format!("source {}/bin/activate", env_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name() {
        assert_eq!(OsFamily::from_os_name("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_os_name("linux"), OsFamily::Linux);
        assert_eq!(
            OsFamily::from_os_name("freebsd"),
            OsFamily::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_guidance_is_distinct_per_family() {
        let mac = OsFamily::MacOs.install_guidance("ffmpeg");
        let linux = OsFamily::Linux.install_guidance("ffmpeg");
        let other = OsFamily::Other("haiku".to_string()).install_guidance("ffmpeg");

        assert!(mac.iter().any(|l| l == "brew install ffmpeg"));
        assert!(linux.iter().any(|l| l.contains("apt install ffmpeg")));
        assert!(other.iter().any(|l| l.contains("https://ffmpeg.org/download.html")));
        assert!(!other.iter().any(|l| l.contains("brew") || l.contains("apt")));
    }

    #[test]
    fn test_homebrew_dir_only_on_macos() {
        assert_eq!(
            OsFamily::MacOs.extra_search_dirs(),
            vec![PathBuf::from("/opt/homebrew/bin")]
        );
        assert!(OsFamily::Linux.extra_search_dirs().is_empty());
    }

    #[test]
    fn test_activation_command() {
        assert_eq!(
            OsFamily::Linux.activation_command("venv"),
            "source venv/bin/activate"
        );
        assert_eq!(
            OsFamily::Other("windows".to_string()).activation_command("venv"),
            "venv\\Scripts\\activate"
        );
    }
}
