use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resource tree represented as a flat mapping from dot-joined path to
/// leaf value. `"a.b.c" → "hello"` corresponds to the leaf `c` under the
/// nested branches `a` and `b`.
pub type FlatEntries = BTreeMap<String, String>;

/// One resource tree per language code (`"en"`, `"ko"`, ...).
pub type ResourceSet = BTreeMap<String, ResourceTree>;

/// A single entry in a [`ResourceTree`]: either a translated leaf string or
/// a nested subtree.
///
/// Leaves are always strings. An empty string is a valid leaf value and is
/// distinct from the key being absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceNode {
    /// A translated string value.
    Leaf(String),
    /// A nested group of entries.
    Branch(ResourceTree),
}

impl ResourceNode {
    /// Create a leaf node from anything string-like.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    /// Returns the leaf value, or `None` for a branch.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// Returns the subtree, or `None` for a leaf.
    pub fn as_branch(&self) -> Option<&ResourceTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(tree) => Some(tree),
        }
    }

    /// Returns `true` for a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

impl From<&str> for ResourceNode {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_owned())
    }
}

impl From<String> for ResourceNode {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

/// An ordered, nested mapping from string key to [`ResourceNode`].
///
/// Entry order is document order: deserializing preserves the order keys
/// appeared in the source, and inserting a new key appends it. Order is NOT
/// canonical until the tree codec's `canonicalize` has run; two trees with
/// the same entries in different orders compare unequal.
///
/// Serializes as a plain JSON object; keys map to strings or nested objects,
/// never arrays or non-string scalars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceTree {
    entries: Vec<(String, ResourceNode)>,
}

impl ResourceTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct entries (not recursive).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&ResourceNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Insert an entry. An existing key is replaced in place (its position
    /// is kept); a new key is appended. Returns the replaced node, if any.
    pub fn insert(&mut self, key: impl Into<String>, node: ResourceNode) -> Option<ResourceNode> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, node)),
            None => {
                self.entries.push((key, node));
                None
            }
        }
    }

    /// Get the branch at `key`, inserting an empty branch if the key is
    /// absent. Returns `None` if the key already holds a leaf.
    pub fn branch_mut(&mut self, key: &str) -> Option<&mut ResourceTree> {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries
                    .push((key.to_owned(), ResourceNode::Branch(ResourceTree::new())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[index].1 {
            ResourceNode::Branch(tree) => Some(tree),
            ResourceNode::Leaf(_) => None,
        }
    }

    /// Iterate over entries in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, ResourceNode)> {
        self.entries.iter()
    }

    /// Sort direct entries by key (byte order), without recursing.
    pub fn sort_keys(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
}

impl IntoIterator for ResourceTree {
    type Item = (String, ResourceNode);
    type IntoIter = std::vec::IntoIter<(String, ResourceNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceTree {
    type Item = &'a (String, ResourceNode);
    type IntoIter = std::slice::Iter<'a, (String, ResourceNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, ResourceNode)> for ResourceTree {
    fn from_iter<I: IntoIterator<Item = (String, ResourceNode)>>(iter: I) -> Self {
        let mut tree = ResourceTree::new();
        for (key, node) in iter {
            tree.insert(key, node);
        }
        tree
    }
}

impl Serialize for ResourceTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for ResourceNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(value) => serializer.serialize_str(value),
            Self::Branch(tree) => tree.serialize(serializer),
        }
    }
}

fn tree_from_map<'de, M: MapAccess<'de>>(mut access: M) -> Result<ResourceTree, M::Error> {
    let mut tree = ResourceTree::new();
    while let Some((key, node)) = access.next_entry::<String, ResourceNode>()? {
        if tree.get(&key).is_some() {
            return Err(de::Error::custom(format!("duplicate key `{key}`")));
        }
        tree.insert(key, node);
    }
    Ok(tree)
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = ResourceTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of resource keys to strings or nested maps")
    }

    fn visit_map<M: MapAccess<'de>>(self, access: M) -> Result<Self::Value, M::Error> {
        tree_from_map(access)
    }
}

impl<'de> Deserialize<'de> for ResourceTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = ResourceNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string leaf or a nested map")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ResourceNode::Leaf(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(ResourceNode::Leaf(value))
    }

    fn visit_map<M: MapAccess<'de>>(self, access: M) -> Result<Self::Value, M::Error> {
        tree_from_map(access).map(ResourceNode::Branch)
    }
}

impl<'de> Deserialize<'de> for ResourceNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}
