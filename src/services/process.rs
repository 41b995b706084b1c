//! Subprocess execution and executable lookup.

use crate::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A command to run: program, arguments and extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: Vec<(String, OsString)>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.env.push((key.to_string(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Arguments as lossy strings, for logging and matching.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Shell-like rendering for log lines.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.arg_strings());
        parts.join(" ")
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// First non-empty line of stdout, falling back to stderr.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .map(str::trim)
            .find(|l| !l.is_empty())
    }
}

/// Runs external programs.
pub trait CommandRunner {
    /// Run a command to completion, capturing its output.
    ///
    /// Fails only if the program could not be started; a nonzero exit is
    /// reported through the outcome.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutcome>;

    /// Find an executable on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// `PATH` value children run with, extra directories included.
    fn search_path(&self) -> OsString;
}

/// Runner backed by `std::process::Command` and the process `PATH`.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    search_path: OsString,
    cwd: PathBuf,
}

impl SystemRunner {
    /// Runner using the current `PATH` plus `extra_dirs` appended at the end.
    pub fn new(cwd: &Path, extra_dirs: &[PathBuf]) -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        Self {
            search_path: append_search_dirs(&path, extra_dirs),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutcome> {
        debug!("Running: {}", invocation.display());

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .env("PATH", &self.search_path)
            .current_dir(invocation.cwd.as_deref().unwrap_or(self.cwd.as_path()));
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        let output = cmd.output()?;
        let outcome = CommandOutcome {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!("Exited: {} ({:?})", invocation.display(), outcome.code);
        Ok(outcome)
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = which::which_in(program, Some(&self.search_path), &self.cwd).ok();
        debug!("Lookup {}: {:?}", program, found);
        found
    }

    fn search_path(&self) -> OsString {
        self.search_path.clone()
    }
}

/// Append directories to a `PATH`-style value, skipping ones already present.
pub fn append_search_dirs(path: &OsString, extra_dirs: &[PathBuf]) -> OsString {
    let mut dirs: Vec<PathBuf> = std::env::split_paths(path).collect();
    for dir in extra_dirs {
        if !dirs.contains(dir) {
            dirs.push(dir.clone());
        }
    }
    std::env::join_paths(dirs).unwrap_or_else(|_| path.clone())
}

/// Prepend a directory to a `PATH`-style value.
pub fn prepend_search_dir(path: &OsString, dir: &Path) -> OsString {
    let mut dirs = vec![dir.to_path_buf()];
    dirs.extend(std::env::split_paths(path).filter(|d| d != dir));
    std::env::join_paths(dirs).unwrap_or_else(|_| path.clone())
}
