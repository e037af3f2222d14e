//! Internal module for drawing a [`TreeNode`] as `tree`-style text.

use crate::options::{GlyphStyle, PathTreeOptions, SortOrder};
use crate::tree::TreeNode;

struct Glyphs {
    tee: &'static str,
    corner: &'static str,
    pipe: &'static str,
    blank: &'static str,
}

impl GlyphStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            GlyphStyle::Unicode => Glyphs {
                tee: "├── ",
                corner: "└── ",
                pipe: "│   ",
                blank: "    ",
            },
            GlyphStyle::Ascii => Glyphs {
                tee: "|-- ",
                corner: "`-- ",
                pipe: "|   ",
                blank: "    ",
            },
        }
    }
}

/// Renders `root` as one line per node, depth first.
///
/// Without a root label the top-level nodes start at column 0 and carry no
/// connector. With one, the label comes first and every node gets a connector.
pub fn render_lines(root: &TreeNode, options: &PathTreeOptions) -> Vec<String> {
    let glyphs = options.glyph_style.glyphs();
    let mut lines = Vec::with_capacity(root.node_count() + 1);
    match &options.root_label {
        Some(label) => {
            lines.push(label.clone());
            walk(root, "", 0, &glyphs, options, &mut lines);
        }
        None => {
            for (name, child) in ordered_children(root, options.sort_order) {
                lines.push(display_name(name, child, options));
                walk(child, "", 1, &glyphs, options, &mut lines);
            }
        }
    }
    lines
}

/// [`render_lines`] joined with newlines, without a trailing newline.
pub fn render(root: &TreeNode, options: &PathTreeOptions) -> String {
    render_lines(root, options).join("\n")
}

fn walk(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    glyphs: &Glyphs,
    options: &PathTreeOptions,
    lines: &mut Vec<String>,
) {
    if options.max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let children = ordered_children(node, options.sort_order);
    let last = children.len().saturating_sub(1);
    for (i, (name, child)) in children.into_iter().enumerate() {
        let (connector, extension) = if i == last {
            (glyphs.corner, glyphs.blank)
        } else {
            (glyphs.tee, glyphs.pipe)
        };
        lines.push(format!(
            "{}{}{}",
            prefix,
            connector,
            display_name(name, child, options)
        ));
        let nested = format!("{}{}", prefix, extension);
        walk(child, &nested, depth + 1, glyphs, options, lines);
    }
}

fn ordered_children(node: &TreeNode, order: SortOrder) -> Vec<(&str, &TreeNode)> {
    let mut children: Vec<_> = node.children().collect();
    match order {
        SortOrder::Insertion => {}
        SortOrder::Alphabetical => children.sort_by(|a, b| a.0.cmp(b.0)),
        // stable sort keeps first-seen order inside each group
        SortOrder::DirectoriesFirst => children.sort_by_key(|(_, child)| child.is_leaf()),
    }
    children
}

fn display_name(name: &str, node: &TreeNode, options: &PathTreeOptions) -> String {
    if options.trailing_slash && !node.is_leaf() {
        format!("{}/", name)
    } else {
        name.to_string()
    }
}
