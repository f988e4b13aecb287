//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use twig::{
    OutputConfig, StreamingFormatter, StreamingOutput, StreamingWalker, TreeStyle, WalkerConfig,
    logging, resolve_root,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Glyphs used to draw the tree
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Charset {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII for terminals without box-drawing support
    Ascii,
}

impl Charset {
    fn style(self) -> TreeStyle {
        match self {
            Charset::Unicode => TreeStyle::UNICODE,
            Charset::Ascii => TreeStyle::ASCII,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print the contents of directories as an indented tree")]
#[command(version)]
struct Args {
    /// Directories to display
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Show hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Descend into symbolic links to directories
    #[arg(short = 'l', long = "follow-links")]
    follow_links: bool,

    /// Glyphs used to draw the tree: unicode, ascii
    #[arg(long = "charset", value_name = "CHARSET", default_value = "unicode")]
    charset: Charset,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log traversal details to stderr (-vv for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    if args.level == Some(0) {
        eprintln!("twig: invalid level 0, must be greater than 0");
        process::exit(1);
    }

    let walker_config = WalkerConfig {
        show_hidden: args.all,
        max_depth: args.level,
        dirs_only: args.dirs_only,
        follow_links: args.follow_links,
        ignore_patterns: args.ignore.clone(),
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        style: args.charset.style(),
    };

    let walker = StreamingWalker::new(walker_config);
    let mut formatter = StreamingFormatter::stdio(output_config);
    let mut failed = false;

    // Each root is rendered independently; one bad root does not stop the rest
    for path in &args.paths {
        let root = match resolve_root(path) {
            Ok(root) => root,
            Err(e) => {
                if let Err(e) = formatter.report_error(&e) {
                    eprintln!("twig: error writing output: {}", e);
                    process::exit(1);
                }
                failed = true;
                continue;
            }
        };

        match walker.walk_streaming(&root, &mut formatter) {
            Ok(report) => failed |= !report.is_success(),
            Err(e) => {
                eprintln!("twig: error writing output: {}", e);
                process::exit(1);
            }
        }
    }

    process::exit(if failed { 1 } else { 0 });
}
