//! Command-line interface for path-tree-graph.
//!
//! Reads paths from the arguments, a file, or stdin and prints them as a tree.

use clap::{Parser, ValueEnum};
use path_tree_graph::{
    GlyphStyle, PathTreeBuilder, PathTreeOptions, PathTreeResult, SortOrder, output, path_tree,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::exit;

/// path-tree-graph — draw a list of paths as a directory tree
#[derive(Parser, Debug)]
#[command(name = "path-tree-graph", version, about, long_about = None)]
struct Cli {
    /// Paths to draw (read from --input or stdin when empty)
    paths: Vec<String>,

    /// File with one path per line ("-" for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Graph)]
    format: Format,

    /// Connector glyphs
    #[arg(long, value_enum, default_value_t = Style::Unicode)]
    style: Style,

    /// Sibling order
    #[arg(long, value_enum, default_value_t = Sort::Insertion)]
    sort: Sort,

    /// Label printed above the tree
    #[arg(long)]
    root: Option<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Append "/" to directories
    #[arg(long)]
    trailing_slash: bool,

    /// Exclude patterns (can be repeated)
    #[arg(short, long = "exclude")]
    exclude_patterns: Vec<String>,

    /// Path separator (can be repeated, default "/" and "\")
    #[arg(long = "separator")]
    separators: Vec<char>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Log level
    #[cfg(feature = "logging")]
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Graph,
    Json,
    Markdown,
    Paths,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Style {
    Unicode,
    Ascii,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Sort {
    Insertion,
    Alphabetical,
    DirsFirst,
}

#[cfg(feature = "logging")]
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

#[cfg(feature = "logging")]
impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Graph => output::OutputFormat::Graph,
            Format::Json => output::OutputFormat::Json,
            Format::Markdown => output::OutputFormat::Markdown,
            Format::Paths => output::OutputFormat::Paths,
        }
    }
}

impl Cli {
    fn to_options(&self) -> PathTreeOptions {
        let mut builder = PathTreeBuilder::new()
            .exclude_patterns(self.exclude_patterns.clone())
            .trailing_slash(self.trailing_slash)
            .glyph_style(match self.style {
                Style::Unicode => GlyphStyle::Unicode,
                Style::Ascii => GlyphStyle::Ascii,
            })
            .sort_order(match self.sort {
                Sort::Insertion => SortOrder::Insertion,
                Sort::Alphabetical => SortOrder::Alphabetical,
                Sort::DirsFirst => SortOrder::DirectoriesFirst,
            });

        if !self.separators.is_empty() {
            builder = builder.separators(self.separators.clone());
        }
        if let Some(label) = &self.root {
            builder = builder.root_label(label.clone());
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        builder.build()
    }

    fn collect_paths(&self) -> io::Result<Vec<String>> {
        let mut paths = self.paths.clone();
        let text = match &self.input {
            Some(file) if file.as_os_str() == "-" => Some(read_stdin()?),
            Some(file) => Some(fs::read_to_string(file)?),
            None if paths.is_empty() => Some(read_stdin()?),
            None => None,
        };
        if let Some(text) = text {
            paths.extend(
                text.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }
        Ok(paths)
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    setup_tracing(cli.log_level);

    let paths = match cli.collect_paths() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: failed to read paths: {}", e);
            exit(1);
        }
    };
    let options = cli.to_options();

    match path_tree(&paths, &options) {
        Ok(result) => output_result(&result, &cli),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn output_result(result: &PathTreeResult, cli: &Cli) {
    let format = output::OutputFormat::from(cli.format);
    if let Some(path) = &cli.output {
        if let Err(e) = output::write_result_to_file(result, format, path, cli.pretty) {
            eprintln!("Error: {}", e);
            exit(1);
        }
        return;
    }
    match output::format_result(result, format, cli.pretty) {
        Ok(out) if out.ends_with('\n') => print!("{}", out),
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
