//! Depth-first tree flattening.

use lingo_types::{FlatEntries, ResourceNode, ResourceTree};

/// Flatten a tree into `(path, value)` pairs.
///
/// Paths are the dot-joined keys from the root to each leaf; values are
/// borrowed from the tree. Pairs are yielded lazily, depth-first, in
/// document order. The iterator is finite and can be recreated from the
/// same tree to restart traversal.
pub fn flatten(tree: &ResourceTree) -> Flatten<'_> {
    Flatten {
        stack: vec![(String::new(), tree.iter())],
    }
}

/// Collect a tree's leaves into owned [`FlatEntries`].
pub fn flat_entries(tree: &ResourceTree) -> FlatEntries {
    flatten(tree)
        .map(|(path, value)| (path, value.to_owned()))
        .collect()
}

/// Iterator over a tree's `(path, value)` leaf pairs. Created by [`flatten`].
pub struct Flatten<'a> {
    /// Pending frames: the path prefix of a subtree and its entry cursor.
    stack: Vec<(String, std::slice::Iter<'a, (String, ResourceNode)>)>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, cursor) = self.stack.last_mut()?;
            match cursor.next() {
                None => {
                    self.stack.pop();
                }
                Some((key, node)) => {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    match node {
                        ResourceNode::Leaf(value) => return Some((path, value)),
                        ResourceNode::Branch(subtree) => self.stack.push((path, subtree.iter())),
                    }
                }
            }
        }
    }
}
