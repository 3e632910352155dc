//! CLI entry point for doctree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use doctree::tree::{
    DEFAULT_EXCLUDE_SUBSTRING, DEFAULT_INDEX_FILENAME, DEFAULT_MARKDOWN_MARKER, DEFAULT_ROOT,
};
use doctree::{JsonFormatter, MarkdownFormatter, OutputConfig, TocConfig, TocWalker, print_json};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "doctree")]
#[command(about = "Print a nested markdown tree of contents for a docs directory")]
#[command(version)]
struct Args {
    /// Docs root to walk
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,

    /// Treat paths containing this substring as drafts
    #[arg(long = "exclude", value_name = "SUBSTRING", default_value = DEFAULT_EXCLUDE_SUBSTRING)]
    exclude: String,

    /// File a directory must contain to be listed
    #[arg(long = "index", value_name = "FILENAME", default_value = DEFAULT_INDEX_FILENAME)]
    index: String,

    /// Substring a file name must contain to be listed
    #[arg(long = "extension", value_name = "MARKER", default_value = DEFAULT_MARKDOWN_MARKER)]
    extension: String,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Replace the introduction line printed before the tree
    #[arg(long = "header", value_name = "TEXT", conflicts_with = "no_header")]
    header: Option<String>,

    /// Omit the introduction line
    #[arg(long = "no-header")]
    no_header: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log skip decisions to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("doctree={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let toc_config = TocConfig {
        root_path: args.path.clone(),
        exclude_substring: args.exclude.clone(),
        index_filename: args.index.clone(),
        markdown_marker: args.extension.clone(),
        ignore_patterns: args.ignore.clone(),
        max_depth: args.level,
    };

    let output_config = if args.no_header {
        OutputConfig { header: None }
    } else if let Some(header) = args.header.clone() {
        OutputConfig {
            header: Some(header),
        }
    } else {
        OutputConfig::default()
    };

    let walker = TocWalker::new(toc_config);

    let result = if args.json {
        let mut formatter = JsonFormatter::new(output_config);
        walker
            .walk_streaming(&mut formatter)
            .and_then(|_| print_json(&formatter))
    } else {
        let mut formatter = MarkdownFormatter::stdout(output_config);
        walker.walk_streaming(&mut formatter).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("doctree: {}", e);
        process::exit(1);
    }
}
