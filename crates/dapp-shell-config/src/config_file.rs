//! Config file discovery
//!
//! `.dapp-shell.toml` is looked up in the current directory first, then in
//! `$HOME`. The first readable candidate wins and is reported together with
//! its path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".dapp-shell.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub content: String,
}

/// Find and read the config file from the standard locations
pub fn find_config_file() -> Option<ConfigSource> {
    let candidates = candidate_paths(Path::new("."), std::env::var_os("HOME"));
    read_first(&candidates)
}

/// Lookup order for a given working directory and `$HOME`
fn candidate_paths(cwd: &Path, home: Option<OsString>) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(CONFIG_FILE)];
    if let Some(home) = home {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    candidates
}

fn read_first(candidates: &[PathBuf]) -> Option<ConfigSource> {
    candidates.iter().find_map(|path| match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigSource {
            path: path.clone(),
            content,
        }),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_cwd_before_home() {
        let candidates = candidate_paths(Path::new("/work"), Some(OsString::from("/home/me")));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/.dapp-shell.toml"),
                PathBuf::from("/home/me/.dapp-shell.toml"),
            ]
        );
    }

    #[test]
    fn test_candidates_without_home() {
        assert_eq!(candidate_paths(Path::new("/work"), None).len(), 1);
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let dir = std::env::temp_dir().join(format!("dapp-shell-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let missing = dir.join("missing.toml");
        let present = dir.join("present.toml");
        let shadowed = dir.join("shadowed.toml");
        std::fs::write(&present, "tick_rate_ms = 50").unwrap();
        std::fs::write(&shadowed, "tick_rate_ms = 75").unwrap();

        let source = read_first(&[missing, present.clone(), shadowed]).unwrap();
        assert_eq!(source.path, present);
        assert_eq!(source.content, "tick_rate_ms = 50");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nothing_readable() {
        assert_eq!(read_first(&[PathBuf::from("/nonexistent/.dapp-shell.toml")]), None);
    }
}
