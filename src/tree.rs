//! Internal module for merging segment sequences into a single tree.

use crate::types::PathSegments;
use hashlink::LinkedHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One unique path prefix, owning its children.
///
/// Children are kept in first-seen order and names are unique per level. The root
/// returned by [`TreeNode::root`] has no name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeNode {
    name: Option<String>,
    children: LinkedHashMap<String, TreeNode>,
}

impl TreeNode {
    /// Creates an empty, unnamed root.
    pub fn root() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            children: LinkedHashMap::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Inserts a chain of segments below this node.
    ///
    /// Existing nodes are reused, so inserting the same chain twice is a no-op.
    /// Returns `true` if at least one node was created.
    pub fn insert<I, S>(&mut self, segments: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut created = false;
        let mut current = self;
        for segment in segments {
            let name = segment.as_ref();
            current = current
                .children
                .entry(name.to_string())
                .or_insert_with(|| {
                    created = true;
                    TreeNode::named(name)
                });
        }
        created
    }

    /// Children as `(name, node)` pairs in first-seen order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the full chain `segments` is reachable from this node.
    pub fn contains<I, S>(&self, segments: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self;
        for segment in segments {
            match current.child(segment.as_ref()) {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }

    /// Number of nodes below this one, not counting itself.
    pub fn node_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.node_count())
            .sum()
    }

    /// Length of the longest chain below this node. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Every chain from this node down to a leaf, in first-seen order.
    pub fn leaf_paths(&self) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        let mut stack = Vec::new();
        collect_leaf_paths(self, &mut stack, &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &TreeNode, stack: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for (name, child) in node.children.iter() {
        stack.push(name.clone());
        if child.is_leaf() {
            out.push(stack.clone());
        } else {
            collect_leaf_paths(child, stack, out);
        }
        stack.pop();
    }
}

/// Serializes as a nested mapping of child names; leaves are empty mappings.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (name, child) in self.children.iter() {
            map.serialize_entry(name, child)?;
        }
        map.end()
    }
}

/// Builds a fresh tree holding every sequence in `entries`.
///
/// The result has exactly one node per unique prefix, siblings in first-seen order.
pub fn build_tree(entries: &[PathSegments]) -> TreeNode {
    let mut root = TreeNode::root();
    for segments in entries {
        root.insert(segments);
    }
    root
}
