//! The sync state machine: fetch → reconcile → persist → report.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use lingo_codec::{canonicalize, flat_entries, unflatten};
use lingo_merge::{merge, ConflictEntry};
use lingo_remote::RemoteSource;
use lingo_store::ResourceStore;
use lingo_types::{FlatEntries, ResourceSet};

use crate::error::{SyncError, SyncResult};
use crate::report::SyncReport;

/// Owns the three collaborators of a sync: the remote source, the local
/// working-copy store, and the anchor store holding the last merged state.
/// All are passed in at construction; the syncer has no global state.
pub struct Syncer<R, L, A> {
    remote: R,
    local: L,
    anchor: A,
}

impl<R, L, A> Syncer<R, L, A>
where
    R: RemoteSource,
    L: ResourceStore,
    A: ResourceStore,
{
    pub fn new(remote: R, local: L, anchor: A) -> Self {
        Self {
            remote,
            local,
            anchor,
        }
    }

    /// Run one full reconciliation.
    ///
    /// The three sources are fetched concurrently; any fetch failure aborts
    /// before anything is written. Languages are then merged one at a time
    /// in sorted order, and the merged set is written to the local and
    /// anchor stores concurrently. Conflicts are auto-resolved and
    /// reported, never a reason to withhold persistence.
    pub async fn sync(&self) -> SyncResult<SyncReport> {
        let (remote_set, local_set, anchor_set) = tokio::try_join!(
            async { self.remote.fetch_all().await.map_err(SyncError::from) },
            async { self.local.read_all().await.map_err(SyncError::from) },
            async { self.anchor.read_all().await.map_err(SyncError::from) },
        )?;

        let languages: BTreeSet<String> = remote_set
            .keys()
            .chain(local_set.keys())
            .chain(anchor_set.keys())
            .cloned()
            .collect();

        let mut merged_set = ResourceSet::new();
        let mut conflicts: BTreeMap<String, Vec<ConflictEntry>> = BTreeMap::new();

        for language in &languages {
            let local = language_entries(&local_set, language);
            let anchor = language_entries(&anchor_set, language);
            let remote = language_entries(&remote_set, language);

            let result = merge(&local, &anchor, &remote);
            debug!(
                language = %language,
                entries = result.merged.len(),
                conflicts = result.conflicts.len(),
                "language reconciled"
            );

            let tree = canonicalize(unflatten(&result.merged)?);
            merged_set.insert(language.clone(), tree);
            if !result.conflicts.is_empty() {
                warn!(
                    language = %language,
                    count = result.conflicts.len(),
                    "conflicts auto-resolved"
                );
                conflicts.insert(language.clone(), result.conflicts);
            }
        }

        tokio::try_join!(
            async { self.local.write_all(&merged_set).await.map_err(SyncError::from) },
            async { self.anchor.write_all(&merged_set).await.map_err(SyncError::from) },
        )?;

        let report = SyncReport {
            languages: languages.into_iter().collect(),
            conflicts,
        };
        info!(
            languages = report.languages.len(),
            conflicts = report.total_conflicts(),
            "sync complete"
        );
        Ok(report)
    }

    /// Fetch the remote and write it to both stores verbatim, skipping the
    /// merge. Local edits are discarded. Used for first-time setup and for
    /// re-baselining a checkout against the remote.
    pub async fn clone_remote(&self) -> SyncResult<Vec<String>> {
        let remote_set = self.remote.fetch_all().await?;
        let merged_set: ResourceSet = remote_set
            .into_iter()
            .map(|(language, tree)| (language, canonicalize(tree)))
            .collect();

        tokio::try_join!(
            async { self.local.write_all(&merged_set).await.map_err(SyncError::from) },
            async { self.anchor.write_all(&merged_set).await.map_err(SyncError::from) },
        )?;

        info!(languages = merged_set.len(), "remote cloned");
        Ok(merged_set.keys().cloned().collect())
    }
}

/// A language's flat entries in a set, defaulting to empty when the
/// language is absent from that source.
fn language_entries(set: &ResourceSet, language: &str) -> FlatEntries {
    set.get(language).map(flat_entries).unwrap_or_default()
}
