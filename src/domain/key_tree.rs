// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical store addressed by dotted keys.
//!
//! Every [`Node`] owns its full dotted key, an optional scalar value and a map
//! from child segment to child node. Children are owned exclusively by their
//! parent. Descent that leaves the subtree it is in restarts from the root,
//! which the [`KeyTree`] holds, so nodes need no parent links.

use crate::domain::errors::{PropertiesError, Result};
use crate::domain::property_key::{PropertyKey, SEGMENT_SEPARATOR};
use std::collections::HashMap;

/// A single element of a [`KeyTree`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    key: PropertyKey,
    value: String,
    children: HashMap<String, Node>,
}

/// Where a key leads relative to a node.
enum Step<'k> {
    /// The key names this node.
    Here,
    /// The key lies outside this node's subtree.
    Escape,
    /// The key continues into the child with this segment.
    Child(&'k str),
}

impl Node {
    fn new(key: PropertyKey) -> Self {
        Self {
            key,
            value: String::new(),
            children: HashMap::new(),
        }
    }

    /// The node's full dotted key (empty for the root).
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// The node's scalar value, or `None` if nothing non-empty was assigned.
    pub fn value(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Returns `true` if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Looks up an immediate child by segment.
    pub fn child(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    /// Iterates over the immediate child segments, in no particular order.
    pub fn child_segments(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Iterates over the immediate children, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    fn step<'k>(&self, key: &'k str) -> Step<'k> {
        let rest = if self.key.is_root() {
            if key.is_empty() {
                return Step::Here;
            }
            key
        } else {
            if key == self.key.as_str() {
                return Step::Here;
            }
            match key
                .strip_prefix(self.key.as_str())
                .and_then(|r| r.strip_prefix(SEGMENT_SEPARATOR))
            {
                Some(rest) => rest,
                None => return Step::Escape,
            }
        };
        let segment = rest.split(SEGMENT_SEPARATOR).next().unwrap_or(rest);
        Step::Child(segment)
    }

    fn count_values(&self) -> usize {
        usize::from(self.value().is_some())
            + self.children.values().map(Node::count_values).sum::<usize>()
    }

    fn has_any_value(&self) -> bool {
        self.value().is_some() || self.children.values().any(Node::has_any_value)
    }

    fn collect_keys(&self, out: &mut Vec<PropertyKey>) {
        if self.value().is_some() {
            out.push(self.key.clone());
        }
        for child in self.children.values() {
            child.collect_keys(out);
        }
    }
}

/// A tree of [`Node`]s addressed by dotted keys.
///
/// # Examples
///
/// ```
/// use keyprops::domain::KeyTree;
///
/// let mut tree = KeyTree::new();
/// tree.put("section1.bool.true", "yes").unwrap();
///
/// let node = tree.find("section1.bool.true").unwrap();
/// assert_eq!(node.value(), Some("yes"));
///
/// // Intermediate segments exist but hold no value.
/// assert_eq!(tree.find("section1").unwrap().value(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyTree {
    root: Node,
}

impl KeyTree {
    /// Creates an empty tree holding only the root.
    pub fn new() -> Self {
        Self {
            root: Node::new(PropertyKey::root()),
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts or overwrites the value at `key`, creating intermediate nodes.
    ///
    /// Assigning to a key that already has children keeps those children.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::InvalidKey`] if `key` is empty or has an
    /// empty segment.
    pub fn put(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        PropertyKey::from(key).validate()?;
        let value = value.into();

        let mut node = &mut self.root;
        loop {
            match node.step(key) {
                Step::Here => {
                    node.value = value;
                    return Ok(());
                }
                Step::Escape => node = &mut self.root,
                Step::Child(segment) => {
                    let child_key = node.key.child(segment);
                    node = node
                        .children
                        .entry(segment.to_string())
                        .or_insert_with(|| Node::new(child_key));
                }
            }
        }
    }

    /// Resolves `key` to its node. The empty key resolves to the root.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::NodeNotFound`] if any segment is missing.
    pub fn find(&self, key: &str) -> Result<&Node> {
        self.find_from(&self.root, key)
    }

    /// Resolves `key` starting from `start`, restarting at the root when the
    /// key is outside `start`'s subtree.
    pub fn find_from<'a>(&'a self, start: &'a Node, key: &str) -> Result<&'a Node> {
        let mut node = start;
        loop {
            match node.step(key) {
                Step::Here => return Ok(node),
                Step::Escape => node = &self.root,
                Step::Child(segment) => {
                    node = node
                        .children
                        .get(segment)
                        .ok_or(PropertiesError::NodeNotFound)?;
                }
            }
        }
    }

    /// Returns `true` if `key` resolves to a node, valued or not.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_ok()
    }

    /// Every key that holds a value, sorted.
    pub fn keys(&self) -> Vec<PropertyKey> {
        let mut keys = Vec::new();
        self.root.collect_keys(&mut keys);
        keys.sort();
        keys
    }

    /// Number of keys that hold a value.
    pub fn len(&self) -> usize {
        self.root.count_values()
    }

    /// Returns `true` if no key holds a value.
    pub fn is_empty(&self) -> bool {
        !self.root.has_any_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_segments(node: &Node) -> Vec<&str> {
        let mut segments: Vec<&str> = node.child_segments().collect();
        segments.sort();
        segments
    }

    #[test]
    fn test_put_then_find() {
        let mut tree = KeyTree::new();
        tree.put("source", "some source").unwrap();
        tree.put("section1.float", "4.5").unwrap();

        assert_eq!(tree.find("source").unwrap().value(), Some("some source"));
        assert_eq!(tree.find("section1.float").unwrap().value(), Some("4.5"));
    }

    #[test]
    fn test_node_keys_are_full_paths() {
        let mut tree = KeyTree::new();
        tree.put("a.b.c", "v").unwrap();

        assert_eq!(tree.find("a").unwrap().key().as_str(), "a");
        assert_eq!(tree.find("a.b").unwrap().key().as_str(), "a.b");
        assert_eq!(tree.find("a.b.c").unwrap().key().as_str(), "a.b.c");
    }

    #[test]
    fn test_intermediate_nodes_have_no_value() {
        let mut tree = KeyTree::new();
        tree.put("section1.bool.true", "yes").unwrap();

        let section = tree.find("section1").unwrap();
        assert_eq!(section.value(), None);
        assert!(section.has_children());
    }

    #[test]
    fn test_put_overwrites() {
        let mut tree = KeyTree::new();
        tree.put("a.b", "first").unwrap();
        tree.put("a.b", "second").unwrap();

        assert_eq!(tree.find("a.b").unwrap().value(), Some("second"));
        assert_eq!(sorted_segments(tree.find("a").unwrap()), vec!["b"]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_value_and_children_coexist() {
        let mut tree = KeyTree::new();
        tree.put("section1.float", "4.5").unwrap();
        tree.put("section1", "direct").unwrap();

        let section = tree.find("section1").unwrap();
        assert_eq!(section.value(), Some("direct"));
        assert_eq!(sorted_segments(section), vec!["float"]);
        assert_eq!(tree.find("section1.float").unwrap().value(), Some("4.5"));
    }

    #[test]
    fn test_find_missing() {
        let mut tree = KeyTree::new();
        tree.put("a.b", "v").unwrap();

        assert!(tree.find("missing").unwrap_err().is_not_found());
        assert!(tree.find("a.c").unwrap_err().is_not_found());
        assert!(tree.find("a.b.c").unwrap_err().is_not_found());
        assert!(tree.find("a..b").unwrap_err().is_not_found());
    }

    #[test]
    fn test_segment_prefix_is_not_a_match() {
        let mut tree = KeyTree::new();
        tree.put("ab.c", "v").unwrap();

        assert!(tree.find("a").unwrap_err().is_not_found());
        assert!(tree.find("ab.c").is_ok());
    }

    #[test]
    fn test_find_empty_key_is_root() {
        let mut tree = KeyTree::new();
        tree.put("a.b", "v").unwrap();
        tree.put("c", "w").unwrap();

        let root = tree.find("").unwrap();
        assert!(root.key().is_root());
        assert_eq!(root.value(), None);
        assert_eq!(sorted_segments(root), vec!["a", "c"]);
    }

    #[test]
    fn test_find_from_restarts_at_root() {
        let mut tree = KeyTree::new();
        tree.put("left.x", "1").unwrap();
        tree.put("right.y", "2").unwrap();

        let left = tree.find("left").unwrap();
        let found = tree.find_from(left, "right.y").unwrap();
        assert_eq!(found.value(), Some("2"));

        let found = tree.find_from(left, "left.x").unwrap();
        assert_eq!(found.value(), Some("1"));
    }

    #[test]
    fn test_put_rejects_malformed_keys() {
        let mut tree = KeyTree::new();
        for bad in ["", ".a", "a.", "a..b"] {
            assert!(
                matches!(tree.put(bad, "v"), Err(PropertiesError::InvalidKey { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
        assert!(tree.is_empty());
        assert!(!tree.root().has_children());
    }

    #[test]
    fn test_empty_value_means_no_value() {
        let mut tree = KeyTree::new();
        tree.put("blank", "").unwrap();

        assert!(tree.contains("blank"));
        assert_eq!(tree.find("blank").unwrap().value(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_keys_lists_valued_nodes_sorted() {
        let mut tree = KeyTree::new();
        tree.put("section1.float", "4.5").unwrap();
        tree.put("bind_port", "9345").unwrap();
        tree.put("section1.bool.true", "yes").unwrap();

        let keys: Vec<String> = tree.keys().into_iter().map(String::from).collect();
        assert_eq!(
            keys,
            vec!["bind_port", "section1.bool.true", "section1.float"]
        );
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_len_counts_only_valued_nodes() {
        let mut tree = KeyTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);

        tree.put("a.b.c", "").unwrap();
        assert!(tree.is_empty());

        tree.put("a.b.c.d", "deep").unwrap();
        assert!(!tree.is_empty());
        assert_eq!(tree.len(), 1);

        tree.put("a", "top").unwrap();
        tree.put("a.b.c.d", "overwritten").unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.len(), tree.keys().len());
    }

    #[test]
    fn test_child_lookup() {
        let mut tree = KeyTree::new();
        tree.put("a.b", "v").unwrap();

        let a = tree.root().child("a").unwrap();
        assert_eq!(a.child("b").unwrap().value(), Some("v"));
        assert!(a.child("c").is_none());
        assert_eq!(a.children().count(), 1);
    }
}
