//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Quran Video Setup - Prepare the Python environment for the video generator
#[derive(Parser, Debug)]
#[command(name = "quran-video-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a config file (default: setup.toml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project directory holding the manifest and the virtual environment
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments() {
        let cli = Cli::try_parse_from(["quran-video-setup"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.project_dir.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "quran-video-setup",
            "-v",
            "--config",
            "custom.toml",
            "-C",
            "/work/project",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.project_dir, Some(PathBuf::from("/work/project")));
    }

    #[test]
    fn test_rejects_positional() {
        assert!(Cli::try_parse_from(["quran-video-setup", "extra"]).is_err());
    }
}
