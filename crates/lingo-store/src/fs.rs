//! Filesystem-backed resource store.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use lingo_codec::canonicalize;
use lingo_types::ResourceSet;

use crate::document::{LanguageDocument, FORMAT_VERSION};
use crate::error::{StoreError, StoreResult};
use crate::traits::ResourceStore;

/// A store rooted at a directory, one `<language>.json` document per
/// language.
///
/// Writes are remove-then-recreate: the root directory is deleted and
/// rebuilt, so the written set is exactly what a subsequent read returns.
pub struct FsResourceStore {
    root: PathBuf,
    clean_legacy: bool,
}

impl FsResourceStore {
    /// A store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clean_legacy: false,
        }
    }

    /// A store that removes files left by older layouts before reading:
    /// `.ts` modules and date-suffixed `*_YYYYMMDD.json` documents. Used for
    /// anchor directories that predate the current document format.
    pub fn with_legacy_cleanup(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            clean_legacy: true,
        }
    }

    /// The root directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ResourceStore for FsResourceStore {
    async fn read_all(&self) -> StoreResult<ResourceSet> {
        match tokio::fs::metadata(&self.root).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ResourceSet::new()),
            Err(e) => return Err(e.into()),
        }
        if self.clean_legacy {
            remove_legacy_files(&self.root).await?;
        }

        let mut set = ResourceSet::new();
        let mut dir = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(|s| s.to_owned()) else {
                continue;
            };

            let text = tokio::fs::read_to_string(&path).await?;
            let doc = LanguageDocument::parse(&text).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
            if doc.format != FORMAT_VERSION {
                return Err(StoreError::UnsupportedFormat {
                    path,
                    found: doc.format,
                    expected: FORMAT_VERSION,
                });
            }
            if doc.language != stem {
                return Err(StoreError::LanguageMismatch {
                    path,
                    expected: stem.to_owned(),
                    found: doc.language,
                });
            }
            set.insert(doc.language, doc.resources);
        }

        debug!(root = %self.root.display(), languages = set.len(), "store read");
        Ok(set)
    }

    async fn write_all(&self, resources: &ResourceSet) -> StoreResult<()> {
        match tokio::fs::remove_dir_all(&self.root).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tokio::fs::create_dir_all(&self.root).await?;

        // Serialize up front, then write every language concurrently.
        let mut tasks = JoinSet::new();
        for (language, tree) in resources {
            let doc = LanguageDocument::new(language.clone(), canonicalize(tree.clone()));
            let text = doc
                .to_json_pretty()
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            let path = self.root.join(format!("{language}.json"));
            tasks.spawn(async move { tokio::fs::write(&path, text).await });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.map_err(|e| StoreError::WriteTask(e.to_string()))??;
        }

        debug!(root = %self.root.display(), languages = resources.len(), "store written");
        Ok(())
    }
}

async fn remove_legacy_files(root: &Path) -> StoreResult<()> {
    let mut dir = tokio::fs::read_dir(root).await?;
    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_legacy_artifact(name) {
            tokio::fs::remove_file(&path).await?;
            warn!(file = name, "removed legacy anchor artifact");
        }
    }
    Ok(())
}

/// Older anchor layouts persisted `.ts` modules, and before that,
/// date-suffixed `<language>_YYYYMMDD.json` documents.
fn is_legacy_artifact(name: &str) -> bool {
    if name.ends_with(".ts") {
        return true;
    }
    if let Some(stem) = name.strip_suffix(".json") {
        if let Some((_, date)) = stem.rsplit_once('_') {
            return date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit());
        }
    }
    false
}
