//! Activated virtual environment.

use crate::services::process::{prepend_search_dir, Invocation};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A virtual environment activated for this process's subcommands.
///
/// Activation never touches the parent process environment; it only shapes
/// the invocations built through [`ExecutionContext::command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub python: PathBuf,
    /// Whether this run created the environment.
    pub created: bool,
}

impl ExecutionContext {
    /// Activate the environment at `root`, if it holds an interpreter.
    pub fn activate(root: &Path, created: bool) -> Option<Self> {
        let layouts = [
            (root.join("bin"), "python"),
            (root.join("Scripts"), "python.exe"),
        ];

        layouts.into_iter().find_map(|(bin_dir, exe)| {
            let python = bin_dir.join(exe);
            python.is_file().then(|| Self {
                root: root.to_path_buf(),
                bin_dir,
                python,
                created,
            })
        })
    }

    /// Build an invocation of the environment's interpreter on top of the
    /// runner's `PATH`.
    pub fn command(&self, base_path: &OsString) -> Invocation {
        Invocation::new(&self.python)
            .env("VIRTUAL_ENV", self.root.as_os_str())
            .env("PATH", prepend_search_dir(base_path, &self.bin_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_activate_missing_interpreter() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ExecutionContext::activate(temp_dir.path(), false).is_none());
    }

    #[test]
    fn test_activate_unix_layout() {
        let temp_dir = TempDir::new().unwrap();
        let bin = temp_dir.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("python"), "").unwrap();

        let ctx = ExecutionContext::activate(temp_dir.path(), true).unwrap();
        assert_eq!(ctx.bin_dir, bin);
        assert_eq!(ctx.python, bin.join("python"));
        assert!(ctx.created);
    }

    #[test]
    fn test_activate_windows_layout() {
        let temp_dir = TempDir::new().unwrap();
        let scripts = temp_dir.path().join("Scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(scripts.join("python.exe"), "").unwrap();

        let ctx = ExecutionContext::activate(temp_dir.path(), false).unwrap();
        assert_eq!(ctx.python, scripts.join("python.exe"));
    }

    #[test]
    fn test_command_sets_virtual_env() {
        let temp_dir = TempDir::new().unwrap();
        let bin = temp_dir.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("python"), "").unwrap();

        let ctx = ExecutionContext::activate(temp_dir.path(), true).unwrap();
        let inv = ctx.command(&OsString::new());

        assert_eq!(inv.program, bin.join("python"));
        let virtual_env = inv.env.iter().find(|(k, _)| k == "VIRTUAL_ENV").unwrap();
        assert_eq!(virtual_env.1.as_os_str(), temp_dir.path().as_os_str());
        let path = inv.env.iter().find(|(k, _)| k == "PATH").unwrap();
        assert_eq!(std::env::split_paths(&path.1).next(), Some(bin));
    }
}
