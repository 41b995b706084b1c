//! File system utilities.

use crate::Result;
use std::path::{Path, PathBuf};

/// Resolve a path against the current directory if it is relative.
///
/// Subcommands run with their own working directory, so any path handed to
/// them must not depend on ours.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("proj")).unwrap(), cwd.join("proj"));

        let already = cwd.join("elsewhere");
        assert_eq!(absolute_path(&already).unwrap(), already);
    }
}
