//! # Path Tree Graph
//!
//! `path_tree_graph` turns a collection of path strings into a hierarchical tree and
//! renders it as graph-style text, similar to the output of the `tree` command.
//!
//! The pipeline is linear: each path is split into segments ([`parse_path`]), the
//! segment sequences are merged into one [`TreeNode`] ([`build_tree`]), and the tree is
//! drawn with connector glyphs ([`render`]). [`path_tree`] runs all three steps.
//! No file system is touched; paths are plain strings.
//!
//! # Features
//!
//! - `parallel`: Parses input paths in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use path_tree_graph::{PathTreeBuilder, path_tree};
//!
//! let options = PathTreeBuilder::new().build();
//! let result = path_tree(&["a/b/c", "a/b/d", "a/e"], &options).expect("valid paths");
//!
//! assert_eq!(
//!     result.graph,
//!     "a\n├── b\n│   ├── c\n│   └── d\n└── e"
//! );
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod parser;
mod render;
mod tree;
mod types;

pub use engine::path_tree;
pub use error::PathTreeError;
pub use options::{GlyphStyle, PathTreeBuilder, PathTreeOptions, SortOrder};
pub use parser::{DEFAULT_SEPARATORS, parse_path};
pub use render::{render, render_lines};
pub use tree::{TreeNode, build_tree};
pub use types::{PathSegments, PathTreeResult};
