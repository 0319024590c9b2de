//! Path helpers for the data directory and config file options

use std::path::{Path, PathBuf};

/// Resolve a user-supplied path: `~` expands to the home directory and
/// relative paths are joined onto the working directory. Not canonicalized.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();
    let expanded = home_relative(path).unwrap_or_else(|| PathBuf::from(path));
    if expanded.is_absolute() {
        return expanded;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

fn home_relative(path: &str) -> Option<PathBuf> {
    let rest = path.strip_prefix('~')?;
    let home = dirs::home_dir()?;
    match rest {
        "" => Some(home),
        _ => rest
            .strip_prefix('/')
            .map(|rest| home.join(Path::new(rest))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(
            expand_path("  /var/lib/rackview  "),
            PathBuf::from("/var/lib/rackview")
        );
    }

    #[test]
    fn test_relative_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(expand_path("./.rackview"), cwd.join("./.rackview"));
        assert_eq!(expand_path("rackview.toml"), cwd.join("rackview.toml"));
        assert_eq!(expand_path(""), cwd);
    }

    #[test]
    fn test_tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~"), home);
            assert_eq!(expand_path("~/.rackview"), home.join(".rackview"));
        }
        // Only a leading `~/` is expanded
        assert!(expand_path("~other/data").ends_with("~other/data"));
    }
}
