//! Configuration discovery and loading.
//!
//! The config file is found by walking from the working directory toward the
//! filesystem root; the first `lingo.toml` (or `.lingo.toml`) wins. All
//! paths in the file resolve relative to the file's own directory, so a
//! config checked into a repository root works from any subdirectory.
//!
//! The loaded [`Config`] is a plain value, constructed once in `main` and
//! passed down; there is no global configuration state.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File names probed during discovery, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["lingo.toml", ".lingo.toml"];

/// Anchor location used when the config does not name one.
const DEFAULT_ANCHOR_PATH: &str = ".lingo/anchor";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no lingo.toml found in {start} or any parent directory", start = .start.display())]
    NotFound { start: PathBuf },

    #[error("failed to read config {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot determine working directory: {0}")]
    WorkingDir(std::io::Error),
}

/// Raw file shape; paths are still relative here.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_path: PathBuf,
    anchor_path: Option<PathBuf>,
    remote: RemoteSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoteSection {
    snapshot_path: PathBuf,
}

/// Resolved configuration: every path absolute-ized against the config
/// file's directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where the local working copy lives.
    pub output_path: PathBuf,
    /// Where the anchor snapshot lives.
    pub anchor_path: PathBuf,
    /// The remote snapshot document.
    pub remote_snapshot: PathBuf,
    /// The config file this was loaded from.
    pub source: PathBuf,
}

impl Config {
    /// Load from an explicit path, or discover from the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
                discover(&cwd)?
            }
        };
        Self::from_file(&path)
    }

    /// Load and resolve a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self {
            output_path: base.join(&file.output_path),
            anchor_path: base.join(
                file.anchor_path
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ANCHOR_PATH)),
            ),
            remote_snapshot: base.join(&file.remote.snapshot_path),
            source: path.to_path_buf(),
        })
    }
}

/// Walk from `start` toward the root, returning the first config file.
fn discover(start: &Path) -> Result<PathBuf, ConfigError> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        dir = current.parent();
    }
    Err(ConfigError::NotFound {
        start: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
output_path = "src/i18n/resources"

[remote]
snapshot_path = "remote/snapshot.json"
"#;

    #[test]
    fn resolves_paths_against_config_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output_path, dir.path().join("src/i18n/resources"));
        assert_eq!(config.remote_snapshot, dir.path().join("remote/snapshot.json"));
        assert_eq!(config.source, path);
    }

    #[test]
    fn anchor_path_defaults_under_dot_lingo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.anchor_path, dir.path().join(".lingo/anchor"));
    }

    #[test]
    fn explicit_anchor_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(
            &path,
            r#"
output_path = "resources"
anchor_path = "snapshots/anchor"

[remote]
snapshot_path = "remote.json"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.anchor_path, dir.path().join("snapshots/anchor"));
    }

    #[test]
    fn discovery_walks_up_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lingo.toml"), MINIMAL).unwrap();
        let nested = dir.path().join("apps/web/src");
        std::fs::create_dir_all(&nested).unwrap();

        let found = discover(&nested).unwrap();
        assert_eq!(found, dir.path().join("lingo.toml"));
    }

    #[test]
    fn discovery_prefers_plain_over_hidden_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lingo.toml"), MINIMAL).unwrap();
        std::fs::write(dir.path().join(".lingo.toml"), MINIMAL).unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("lingo.toml"));
    }

    #[test]
    fn missing_config_reports_start_directory() {
        let dir = TempDir::new().unwrap();
        let err = discover(&dir.path().join("nowhere")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(&path, "output_path = \"resources\"\n").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(
            &path,
            r#"
output_path = "resources"
google_sheet_id = "stale-setting"

[remote]
snapshot_path = "remote.json"
"#,
        )
        .unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
