//! Rebuilding nested trees from flat entries.

use lingo_types::{FlatEntries, ResourceNode, ResourceTree};

use crate::error::{CodecError, CodecResult};

/// Rebuild a nested tree from flat `(path, value)` entries.
///
/// Each path is split on `.`; every segment but the last becomes a branch,
/// created on demand, and the last becomes a leaf. A segment that is already
/// occupied by a leaf (or a final segment landing on an existing branch) is
/// malformed input and fails with [`CodecError::PathCollision`].
pub fn unflatten(entries: &FlatEntries) -> CodecResult<ResourceTree> {
    let mut root = ResourceTree::new();
    for (path, value) in entries {
        insert_path(&mut root, path, value)?;
    }
    Ok(root)
}

fn insert_path(root: &mut ResourceTree, path: &str, value: &str) -> CodecResult<()> {
    if path.is_empty() {
        return Err(CodecError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    let Some((leaf_key, branches)) = segments.split_last() else {
        return Err(CodecError::EmptyPath);
    };

    let mut cursor = root;
    for segment in branches {
        cursor = cursor
            .branch_mut(segment)
            .ok_or_else(|| CodecError::PathCollision {
                path: path.to_owned(),
                segment: (*segment).to_owned(),
            })?;
    }

    match cursor.get(leaf_key) {
        Some(ResourceNode::Branch(_)) => Err(CodecError::PathCollision {
            path: path.to_owned(),
            segment: (*leaf_key).to_owned(),
        }),
        _ => {
            cursor.insert(*leaf_key, ResourceNode::leaf(value));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flat_entries;

    fn entries(pairs: &[(&str, &str)]) -> FlatEntries {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn rebuilds_nested_structure() {
        let tree = unflatten(&entries(&[
            ("label.button.next", "Next"),
            ("label.button.prev", "Previous"),
            ("title", "Home"),
        ]))
        .unwrap();

        let button = tree
            .get("label")
            .and_then(|n| n.as_branch())
            .and_then(|t| t.get("button"))
            .and_then(|n| n.as_branch())
            .unwrap();
        assert_eq!(button.get("next").and_then(|n| n.as_leaf()), Some("Next"));
        assert_eq!(button.get("prev").and_then(|n| n.as_leaf()), Some("Previous"));
        assert_eq!(tree.get("title").and_then(|n| n.as_leaf()), Some("Home"));
    }

    #[test]
    fn single_segment_path_is_a_root_leaf() {
        let tree = unflatten(&entries(&[("greeting", "Hello")])).unwrap();
        assert_eq!(tree.get("greeting").and_then(|n| n.as_leaf()), Some("Hello"));
    }

    #[test]
    fn empty_entries_produce_empty_tree() {
        let tree = unflatten(&FlatEntries::new()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn leaf_then_branch_collision_is_fatal() {
        let err = unflatten(&entries(&[("a", "leaf"), ("a.b", "nested")])).unwrap_err();
        assert_eq!(
            err,
            CodecError::PathCollision {
                path: "a.b".to_owned(),
                segment: "a".to_owned(),
            }
        );
    }

    #[test]
    fn branch_then_leaf_collision_is_fatal() {
        // BTreeMap iteration visits "a.b" before "a", so the branch exists
        // when the bare leaf path arrives.
        let err = unflatten(&entries(&[("a.b", "nested"), ("a", "leaf")])).unwrap_err();
        assert_eq!(
            err,
            CodecError::PathCollision {
                path: "a".to_owned(),
                segment: "a".to_owned(),
            }
        );
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = unflatten(&entries(&[("", "v")])).unwrap_err();
        assert_eq!(err, CodecError::EmptyPath);
    }

    #[test]
    fn round_trip_preserves_leaf_set() {
        let original = entries(&[
            ("auth.login.title", "Login"),
            ("auth.login.subtitle", "Welcome back"),
            ("common.next", "Next"),
            ("common.blank", ""),
        ]);
        let tree = unflatten(&original).unwrap();
        assert_eq!(flat_entries(&tree), original);
    }
}
