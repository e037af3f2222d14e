use crate::error::PathTreeError;
use crate::parser::DEFAULT_SEPARATORS;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ordered, non-empty segment names of a single input path.
///
/// Produced by [`parse_path`](crate::parse_path). `a//b/./c/` becomes `["a", "b", "c"]`.
/// Deserializing goes through [`TryFrom<Vec<String>>`], which applies the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    pub(crate) fn new(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self(segments)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: inputs without segments are rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Joins the segments with `sep`, e.g. `segments.join("/")`.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl fmt::Display for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("/"))
    }
}

impl<'a> IntoIterator for &'a PathSegments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<String>> for PathSegments {
    type Error = PathTreeError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err(PathTreeError::EmptyPath);
        }
        for segment in &segments {
            let reason = if segment.trim().is_empty() {
                "empty path segment"
            } else if segment == "." {
                "'.' is not a path segment"
            } else if segment.contains('\0') {
                "contains a NUL character"
            } else if segment.contains(&DEFAULT_SEPARATORS[..]) {
                "path segment contains a separator"
            } else {
                continue;
            };
            return Err(PathTreeError::invalid(&segments.join("/"), reason));
        }
        Ok(Self(segments))
    }
}

impl From<PathSegments> for Vec<String> {
    fn from(segments: PathSegments) -> Self {
        segments.0
    }
}

/// The complete result of a path-tree-graph operation.
#[derive(Debug, Serialize)]
pub struct PathTreeResult {
    /// The merged tree, serialized as a nested mapping of names.
    pub tree: TreeNode,
    /// The graph-style rendering of [`tree`](Self::tree).
    ///
    /// This is a string similar to the output of the `tree` command.
    pub graph: String,
    /// Number of input paths that made it into the tree (after exclusions).
    pub paths: usize,
}
