use path_tree_graph::{
    build_tree, parse_path, render, render_lines, GlyphStyle, PathSegments, PathTreeBuilder,
    PathTreeError, SortOrder, TreeNode, DEFAULT_SEPARATORS,
};
fn tree_of(paths: &[&str]) -> TreeNode {
    let parsed: Vec<_> = paths
        .iter()
        .map(|p| parse_path(p, &DEFAULT_SEPARATORS).unwrap())
        .collect();
    build_tree(&parsed)
}
#[test]
fn test_parse_collapses_separators() {
    let segments = parse_path("/a//b/./c/", &DEFAULT_SEPARATORS).unwrap();
    assert_eq!(segments.as_slice(), ["a", "b", "c"]);
    assert_eq!(segments.to_string(), "a/b/c");
}
#[test]
fn test_parse_mixed_separators() {
    let segments = parse_path(r"C:\Users\me/docs\notes.txt", &DEFAULT_SEPARATORS).unwrap();
    assert_eq!(segments.as_slice(), ["C:", "Users", "me", "docs", "notes.txt"]);
}
#[test]
fn test_parse_keeps_parent_segments() {
    let segments = parse_path("../a/..", &DEFAULT_SEPARATORS).unwrap();
    assert_eq!(segments.as_slice(), ["..", "a", ".."]);
}
#[test]
fn test_parse_custom_separator() {
    let segments = parse_path("a/b:c", &[':']).unwrap();
    assert_eq!(segments.as_slice(), ["a/b", "c"]);
}
#[test]
fn test_parse_rejects_empty() {
    assert!(matches!(
        parse_path("", &DEFAULT_SEPARATORS),
        Err(PathTreeError::EmptyPath)
    ));
    assert!(matches!(
        parse_path("   ", &DEFAULT_SEPARATORS),
        Err(PathTreeError::EmptyPath)
    ));
}
#[test]
fn test_parse_rejects_malformed() {
    for raw in ["/", "//", "./", r"\.\", "a\0b", " / ", "/ \t/."] {
        let err = parse_path(raw, &DEFAULT_SEPARATORS).unwrap_err();
        assert!(
            matches!(err, PathTreeError::InvalidPath { .. }),
            "{raw:?} gave {err:?}"
        );
    }
}
#[test]
fn test_parse_drops_blank_segments() {
    let segments = parse_path("a/ /b/  ", &DEFAULT_SEPARATORS).unwrap();
    assert_eq!(segments.as_slice(), ["a", "b"]);
}
#[test]
fn test_segments_deserialize_validates() {
    let segments: PathSegments = serde_json::from_str(r#"["a", "b c", ".."]"#).unwrap();
    assert_eq!(segments.as_slice(), ["a", "b c", ".."]);
    assert_eq!(serde_json::to_string(&segments).unwrap(), r#"["a","b c",".."]"#);
    for json in [r#"[]"#, r#"[""]"#, r#"["a", " "]"#, r#"["."]"#, r#"["a//b"]"#, r#"["a\\b"]"#] {
        assert!(
            serde_json::from_str::<PathSegments>(json).is_err(),
            "{json} should be rejected"
        );
    }
}
#[test]
fn test_segments_try_from() {
    let segments = PathSegments::try_from(vec!["x".to_string(), "y".to_string()]).unwrap();
    assert_eq!(Vec::<String>::from(segments), ["x", "y"]);
    assert!(matches!(
        PathSegments::try_from(Vec::new()),
        Err(PathTreeError::EmptyPath)
    ));
    assert!(matches!(
        PathSegments::try_from(vec!["a".to_string(), String::new()]),
        Err(PathTreeError::InvalidPath { .. })
    ));
}
#[test]
fn test_tree_structure() {
    let tree = tree_of(&["a/b/c", "a/b/d", "a/e"]);
    let a = tree.child("a").unwrap();
    let a_children: Vec<_> = a.children().map(|(name, _)| name).collect();
    assert_eq!(a_children, ["b", "e"]);
    let b_children: Vec<_> = a.child("b").unwrap().children().map(|(n, _)| n).collect();
    assert_eq!(b_children, ["c", "d"]);
    assert!(a.child("e").unwrap().is_leaf());
    assert_eq!(tree.name(), None);
    assert_eq!(a.name(), Some("a"));
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.depth(), 3);
}
#[test]
fn test_every_input_reachable() {
    let paths = ["x/y", "x/y/z", "w", "x/q/r/s", "w/v"];
    let tree = tree_of(&paths);
    for path in paths {
        let segments = parse_path(path, &DEFAULT_SEPARATORS).unwrap();
        assert!(tree.contains(&segments), "{path} not reachable");
    }
    assert!(!tree.contains(["x", "missing"]));
}
#[test]
fn test_insert_is_idempotent() {
    let mut tree = TreeNode::root();
    assert!(tree.insert(["a", "b"]));
    let before = tree.clone();
    assert!(!tree.insert(["a", "b"]));
    assert!(!tree.insert(["a"]));
    assert_eq!(tree, before);
    assert_eq!(tree.child("a").unwrap().children().count(), 1);
}
#[test]
fn test_siblings_keep_first_seen_order() {
    let tree = tree_of(&["z", "a", "m/x", "a/y", "z"]);
    let names: Vec<_> = tree.children().map(|(n, _)| n).collect();
    assert_eq!(names, ["z", "a", "m"]);
    assert_eq!(
        tree.leaf_paths(),
        vec![
            vec!["z".to_string()],
            vec!["a".to_string(), "y".to_string()],
            vec!["m".to_string(), "x".to_string()],
        ]
    );
}
#[test]
fn test_render_example() {
    let tree = tree_of(&["a/b/c", "a/b/d", "a/e"]);
    let lines = render_lines(&tree, &PathTreeBuilder::new().build());
    assert_eq!(lines, ["a", "├── b", "│   ├── c", "│   └── d", "└── e"]);
}
#[test]
fn test_render_is_idempotent() {
    let tree = tree_of(&["src/lib.rs", "src/bin/main.rs", "Cargo.toml"]);
    let options = PathTreeBuilder::new().build();
    assert_eq!(render(&tree, &options), render(&tree, &options));
}
#[test]
fn test_render_root_label_and_ascii() {
    let tree = tree_of(&["a/b", "c"]);
    let options = PathTreeBuilder::new()
        .root_label(".")
        .glyph_style(GlyphStyle::Ascii)
        .build();
    assert_eq!(render(&tree, &options), ".\n|-- a\n|   `-- b\n`-- c");
}
#[test]
fn test_render_last_sibling_padding() {
    let tree = tree_of(&["a/b/c", "a/d", "e/f/g", "e/f/h"]);
    let options = PathTreeBuilder::new().root_label("root").build();
    assert_eq!(
        render_lines(&tree, &options),
        [
            "root",
            "├── a",
            "│   ├── b",
            "│   │   └── c",
            "│   └── d",
            "└── e",
            "    └── f",
            "        ├── g",
            "        └── h",
        ]
    );
}
#[test]
fn test_render_sort_orders() {
    let tree = tree_of(&["zeta", "beta/x", "alpha", "gamma/y"]);
    let alphabetical = PathTreeBuilder::new()
        .sort_order(SortOrder::Alphabetical)
        .max_depth(0)
        .build();
    assert_eq!(
        render_lines(&tree, &alphabetical),
        ["alpha", "beta", "gamma", "zeta"]
    );
    let dirs_first = PathTreeBuilder::new()
        .sort_order(SortOrder::DirectoriesFirst)
        .trailing_slash(true)
        .max_depth(0)
        .build();
    assert_eq!(
        render_lines(&tree, &dirs_first),
        ["beta/", "gamma/", "zeta", "alpha"]
    );
}
#[test]
fn test_render_max_depth() {
    let tree = tree_of(&["a/b/c/d"]);
    let options = PathTreeBuilder::new().max_depth(1).build();
    assert_eq!(render_lines(&tree, &options), ["a", "└── b"]);
    let labelled = PathTreeBuilder::new().root_label(".").max_depth(1).build();
    assert_eq!(render_lines(&tree, &labelled), [".", "└── a", "    └── b"]);
}
#[test]
fn test_render_empty_tree() {
    let tree = TreeNode::root();
    assert_eq!(render(&tree, &PathTreeBuilder::new().build()), "");
}
