use crate::error::PathTreeError;
use crate::options::PathTreeOptions;
use crate::parser::parse_path;
use crate::render::render;
use crate::tree::build_tree;
use crate::types::{PathSegments, PathTreeResult};
use globset::{Glob, GlobSet, GlobSetBuilder};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "logging")]
use tracing;
struct Excluder {
    matcher: Option<GlobSet>,
}
impl Excluder {
    fn new(options: &PathTreeOptions) -> Result<Self, PathTreeError> {
        if options.exclude_patterns.is_empty() {
            return Ok(Self { matcher: None });
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in &options.exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                PathTreeError::Pattern(format!("Invalid glob pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        let matcher = builder
            .build()
            .map_err(|e| PathTreeError::Pattern(format!("Failed to build glob set: {}", e)))?;
        Ok(Self {
            matcher: Some(matcher),
        })
    }
    /// A path is excluded when any of its prefixes matches, so `target` prunes
    /// everything below it.
    fn is_excluded(&self, segments: &PathSegments) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };
        let mut prefix = String::new();
        for segment in segments {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if matcher.is_match(&prefix) {
                return true;
            }
        }
        false
    }
}
#[cfg(not(feature = "parallel"))]
fn parse_all<S>(paths: &[S], options: &PathTreeOptions) -> Result<Vec<PathSegments>, PathTreeError>
where
    S: AsRef<str>,
{
    paths
        .iter()
        .map(|raw| parse_path(raw.as_ref(), &options.separators))
        .collect()
}
#[cfg(feature = "parallel")]
fn parse_all<S>(paths: &[S], options: &PathTreeOptions) -> Result<Vec<PathSegments>, PathTreeError>
where
    S: AsRef<str> + Sync,
{
    let parsed: Vec<Result<PathSegments, PathTreeError>> = paths
        .par_iter()
        .map(|raw| parse_path(raw.as_ref(), &options.separators))
        .collect();
    // sequential so the lowest-index error wins regardless of thread timing
    parsed.into_iter().collect()
}
/// Parses `paths`, merges them into a tree and renders it.
///
/// # Errors
///
/// Fails on the first path that cannot be parsed, or on an invalid exclude pattern.
pub fn path_tree<S>(paths: &[S], options: &PathTreeOptions) -> Result<PathTreeResult, PathTreeError>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "logging")]
    tracing::debug!("Building path tree from {} paths", paths.len());
    let excluder = Excluder::new(options)?;
    let parsed = parse_all(paths, options)?;
    let kept: Vec<PathSegments> = parsed
        .into_iter()
        .filter(|segments| {
            let excluded = excluder.is_excluded(segments);
            #[cfg(feature = "logging")]
            if excluded {
                tracing::debug!("Excluded path: {}", segments);
            }
            !excluded
        })
        .collect();
    let tree = build_tree(&kept);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Tree has {} nodes, depth {}",
        tree.node_count(),
        tree.depth()
    );
    let graph = render(&tree, options);
    Ok(PathTreeResult {
        tree,
        graph,
        paths: kept.len(),
    })
}
