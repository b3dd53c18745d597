//! Snapshot-file remote adapter.
//!
//! Reads the whole remote state from a single versioned JSON document,
//! staged by whatever exporter sits upstream (CI job, spreadsheet dump):
//!
//! ```json
//! { "format": 1, "resources": { "en": { ... }, "ko": { ... } } }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lingo_types::ResourceSet;

use crate::error::{RemoteError, RemoteResult};
use crate::traits::RemoteSource;

/// Current snapshot format version.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// The snapshot document: every language's tree in one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSnapshot {
    pub format: u32,
    pub resources: ResourceSet,
}

impl RemoteSnapshot {
    /// Wrap a resource set in a current-format snapshot.
    pub fn new(resources: ResourceSet) -> Self {
        Self {
            format: SNAPSHOT_FORMAT_VERSION,
            resources,
        }
    }
}

/// A `RemoteSource` that reads a [`RemoteSnapshot`] document from disk.
///
/// A missing file is a fetch failure, not an empty remote: an empty remote
/// would delete every local language on merge.
pub struct SnapshotRemote {
    path: PathBuf,
}

impl SnapshotRemote {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RemoteSource for SnapshotRemote {
    async fn fetch_all(&self) -> RemoteResult<ResourceSet> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: RemoteSnapshot =
            serde_json::from_str(&text).map_err(|source| RemoteError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        if snapshot.format != SNAPSHOT_FORMAT_VERSION {
            return Err(RemoteError::UnsupportedFormat {
                path: self.path.clone(),
                found: snapshot.format,
                expected: SNAPSHOT_FORMAT_VERSION,
            });
        }
        debug!(path = %self.path.display(), languages = snapshot.resources.len(), "remote snapshot fetched");
        Ok(snapshot.resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_types::{ResourceNode, ResourceTree};
    use tempfile::TempDir;

    fn sample_set() -> ResourceSet {
        let mut en = ResourceTree::new();
        en.insert("greeting", ResourceNode::leaf("Hello"));
        let mut set = ResourceSet::new();
        set.insert("en".to_owned(), en);
        set
    }

    #[tokio::test]
    async fn fetches_languages_from_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("remote.json");
        let snapshot = RemoteSnapshot::new(sample_set());
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let remote = SnapshotRemote::new(&path);
        assert_eq!(remote.fetch_all().await.unwrap(), sample_set());
    }

    #[tokio::test]
    async fn missing_snapshot_is_a_fetch_failure() {
        let dir = TempDir::new().unwrap();
        let remote = SnapshotRemote::new(dir.path().join("absent.json"));
        assert!(matches!(remote.fetch_all().await, Err(RemoteError::Io(_))));
    }

    #[tokio::test]
    async fn malformed_snapshot_is_a_fetch_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("remote.json");
        std::fs::write(&path, "{ nope").unwrap();

        let remote = SnapshotRemote::new(&path);
        assert!(matches!(
            remote.fetch_all().await,
            Err(RemoteError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_snapshot_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("remote.json");
        std::fs::write(&path, r#"{"format":2,"resources":{}}"#).unwrap();

        let remote = SnapshotRemote::new(&path);
        assert!(matches!(
            remote.fetch_all().await,
            Err(RemoteError::UnsupportedFormat { found: 2, .. })
        ));
    }
}
