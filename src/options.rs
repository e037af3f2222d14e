use crate::parser::DEFAULT_SEPARATORS;
use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Insertion,
    Alphabetical,
    DirectoriesFirst,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathTreeOptions {
    pub separators: Vec<char>,
    pub exclude_patterns: Vec<String>,
    pub glyph_style: GlyphStyle,
    pub sort_order: SortOrder,
    pub max_depth: Option<usize>,
    pub trailing_slash: bool,
    pub root_label: Option<String>,
}
impl Default for PathTreeOptions {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            exclude_patterns: Vec::new(),
            glyph_style: GlyphStyle::Unicode,
            sort_order: SortOrder::Insertion,
            max_depth: None,
            trailing_slash: false,
            root_label: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct PathTreeBuilder {
    options: PathTreeOptions,
}
impl PathTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn separators(mut self, separators: Vec<char>) -> Self {
        self.options.separators = separators;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn glyph_style(mut self, style: GlyphStyle) -> Self {
        self.options.glyph_style = style;
        self
    }
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.options.sort_order = order;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn trailing_slash(mut self, yes: bool) -> Self {
        self.options.trailing_slash = yes;
        self
    }
    pub fn root_label(mut self, label: impl Into<String>) -> Self {
        self.options.root_label = Some(label.into());
        self
    }
    pub fn build(self) -> PathTreeOptions {
        self.options
    }
}
