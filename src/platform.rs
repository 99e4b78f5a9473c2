//! Cross-platform config file resolution.
//!
//! The config file is optional, so resolution only reports a path when a
//! file actually exists at one of the candidate locations.

use std::path::PathBuf;

/// Locate the config file, if any.
///
/// Priority order:
/// 1. Home directory (~/.somno/config.toml)
/// 2. Platform-specific config directory (XDG on Linux, AppData on Windows)
pub fn config_path() -> Option<PathBuf> {
    let candidates = candidate_paths(home::home_dir(), dirs::config_dir());
    candidates.into_iter().find(|path| path.exists())
}

/// The candidate locations in priority order, from explicit base
/// directories so the chain itself is testable.
fn candidate_paths(home: Option<PathBuf>, config_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home {
        candidates.push(home.join(".somno").join("config.toml"));
    }

    if let Some(dir) = config_dir {
        candidates.push(dir.join("somno").join("config.toml"));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_takes_priority() {
        let candidates = candidate_paths(
            Some(PathBuf::from("/home/user")),
            Some(PathBuf::from("/home/user/.config")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/home/user/.somno/config.toml"),
                PathBuf::from("/home/user/.config/somno/config.toml"),
            ]
        );
    }

    #[test]
    fn test_missing_home_falls_back_to_config_dir() {
        let candidates = candidate_paths(None, Some(PathBuf::from("/etc/xdg")));
        assert_eq!(candidates, vec![PathBuf::from("/etc/xdg/somno/config.toml")]);
    }

    #[test]
    fn test_no_base_dirs_yields_no_candidates() {
        assert!(candidate_paths(None, None).is_empty());
    }
}
