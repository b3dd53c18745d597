//! Per-key three-way merge over flat entry maps.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use lingo_types::FlatEntries;

/// A key where local and remote could not be reconciled automatically.
///
/// Every value is `Some` if the key existed in that source and `None` if it
/// did not. An empty string is a real value, not an absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub key: String,
    pub local_value: Option<String>,
    pub remote_value: Option<String>,
    pub anchor_value: Option<String>,
}

/// The outcome of merging one language's entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// The reconciled entries. Conflicting keys carry their auto-resolved
    /// value; keys deleted on both sides (or deleted against an unchanged
    /// counterpart) are absent.
    pub merged: FlatEntries,
    /// Conflicting keys, sorted ascending by key. Each one was auto-resolved
    /// into `merged`; this list exists for reporting.
    pub conflicts: Vec<ConflictEntry>,
}

impl MergeResult {
    /// Returns `true` if the merge completed without conflicts.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Three-way merge of flat entries for one language.
///
/// Walks the union of keys across `local`, `anchor`, and `remote`. For each
/// key, presence and value equality across the three sources determine the
/// outcome:
///
/// - matching edits and one-sided edits merge silently;
/// - divergent edits (and divergent additions) conflict, resolved to the
///   remote value (remote is the reviewed source of truth);
/// - a deletion against an edit conflicts, resolved to the *edit* whichever
///   side made it, so intentional content changes are never discarded
///   silently;
/// - a deletion against an unchanged counterpart deletes.
///
/// Pure function: no I/O, nothing consulted beyond the three maps. Conflicts
/// come back sorted ascending by key; callers rely on that ordering.
pub fn merge(local: &FlatEntries, anchor: &FlatEntries, remote: &FlatEntries) -> MergeResult {
    let mut merged = FlatEntries::new();
    let mut conflicts = Vec::new();

    // Union over BTreeSet so keys are visited in sorted order, which keeps
    // the conflict list sorted without a separate pass.
    let keys: BTreeSet<&String> = local
        .keys()
        .chain(anchor.keys())
        .chain(remote.keys())
        .collect();

    for key in keys {
        match (local.get(key), anchor.get(key), remote.get(key)) {
            // Key present in all three sources.
            (Some(l), Some(a), Some(r)) => {
                if a == r {
                    // Remote untouched: local's version wins whether or not
                    // local edited it.
                    merged.insert(key.clone(), l.clone());
                } else if l == a || l == r {
                    // Local untouched, or both sides converged on the same
                    // new value.
                    merged.insert(key.clone(), r.clone());
                } else {
                    // Divergent edits: remote wins.
                    merged.insert(key.clone(), r.clone());
                    conflicts.push(ConflictEntry {
                        key: key.clone(),
                        local_value: Some(l.clone()),
                        remote_value: Some(r.clone()),
                        anchor_value: Some(a.clone()),
                    });
                }
            }

            // Key absent from the anchor: added since the last sync.
            (Some(l), None, Some(r)) => {
                merged.insert(key.clone(), r.clone());
                if l != r {
                    // Divergent additions: remote wins.
                    conflicts.push(ConflictEntry {
                        key: key.clone(),
                        local_value: Some(l.clone()),
                        remote_value: Some(r.clone()),
                        anchor_value: None,
                    });
                }
            }
            (Some(l), None, None) => {
                merged.insert(key.clone(), l.clone());
            }
            (None, None, Some(r)) => {
                merged.insert(key.clone(), r.clone());
            }

            // Key known to the anchor but deleted locally.
            (None, Some(a), Some(r)) => {
                if a != r {
                    // Remote edited what local deleted: the edit survives.
                    merged.insert(key.clone(), r.clone());
                    conflicts.push(ConflictEntry {
                        key: key.clone(),
                        local_value: None,
                        remote_value: Some(r.clone()),
                        anchor_value: Some(a.clone()),
                    });
                }
                // Remote unchanged: the deletion stands.
            }

            // Key known to the anchor but deleted remotely.
            (Some(l), Some(a), None) => {
                if l != a {
                    // Local edited what remote deleted: the edit survives.
                    merged.insert(key.clone(), l.clone());
                    conflicts.push(ConflictEntry {
                        key: key.clone(),
                        local_value: Some(l.clone()),
                        remote_value: None,
                        anchor_value: Some(a.clone()),
                    });
                }
                // Local unchanged: the deletion stands.
            }

            // Deleted on both sides.
            (None, Some(_), None) => {}

            // Unreachable: every key comes from the union of the three maps.
            (None, None, None) => {}
        }
    }

    MergeResult { merged, conflicts }
}
