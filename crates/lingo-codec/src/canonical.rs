//! Canonical key ordering.

use lingo_types::{ResourceNode, ResourceTree};

/// Recursively sort keys at every level by byte order.
///
/// Applied before persistence so serialized output is diff-stable no matter
/// what order entries arrived in.
pub fn canonicalize(tree: ResourceTree) -> ResourceTree {
    let mut entries: Vec<(String, ResourceNode)> = tree
        .into_iter()
        .map(|(key, node)| {
            let node = match node {
                ResourceNode::Branch(subtree) => ResourceNode::Branch(canonicalize(subtree)),
                leaf => leaf,
            };
            (key, node)
        })
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flat_entries;

    fn unsorted() -> ResourceTree {
        let mut inner = ResourceTree::new();
        inner.insert("z", ResourceNode::leaf("26"));
        inner.insert("a", ResourceNode::leaf("1"));

        let mut tree = ResourceTree::new();
        tree.insert("outer", ResourceNode::Branch(inner));
        tree.insert("apple", ResourceNode::leaf("fruit"));
        tree
    }

    #[test]
    fn sorts_keys_at_every_level() {
        let tree = canonicalize(unsorted());
        let top: Vec<_> = tree.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(top, ["apple", "outer"]);

        let inner = tree.get("outer").and_then(|n| n.as_branch()).unwrap();
        let inner_keys: Vec<_> = inner.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(inner_keys, ["a", "z"]);
    }

    #[test]
    fn is_idempotent() {
        let once = canonicalize(unsorted());
        let twice = canonicalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_leaf_set() {
        let tree = unsorted();
        let before = flat_entries(&tree);
        let after = flat_entries(&canonicalize(tree));
        assert_eq!(before, after);
    }

    #[test]
    fn empty_tree_is_unchanged() {
        assert_eq!(canonicalize(ResourceTree::new()), ResourceTree::new());
    }
}
