//! CLI entry point for gitbook-gen

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use gitbook_gen::tree::{DEFAULT_IGNORE_PATTERNS, DEFAULT_MAX_DEPTH};
use gitbook_gen::{GeneratorConfig, WalkerConfig, generate, logging, print_report, print_report_json};

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

/// Parse a depth limit; the source root's children are level 1, so 0 is rejected.
fn parse_level(s: &str) -> Result<usize, String> {
    let level: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if level == 0 {
        return Err("level must be at least 1".to_string());
    }
    Ok(level)
}

#[derive(Parser, Debug)]
#[command(name = "gitbook-gen")]
#[command(about = "Generate a GitBook skeleton mirroring one or more source directories")]
#[command(version)]
struct Args {
    /// Source directories; each produces a <name>_gitbook directory
    #[arg(value_name = "SRC_DIR")]
    paths: Vec<PathBuf>,

    /// Deepest level that gets its own entry; directories there become single pages
    #[arg(short = 'L', long = "level", default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_level)]
    level: usize,

    /// Skip entries whose name matches pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not apply the built-in ignore patterns (*readme.md, *build*, *_test.go)
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Directory to create the books in (default: current directory)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print a summary of generated books when done
    #[arg(long = "report", conflicts_with = "json")]
    report: bool,

    /// Print the generation report as JSON
    #[arg(long = "json", conflicts_with = "report")]
    json: bool,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let mut ignore_patterns: Vec<String> = if self.no_default_ignores {
            Vec::new()
        } else {
            DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
        };
        ignore_patterns.extend(self.ignore.iter().cloned());

        WalkerConfig {
            max_depth: self.level,
            ignore_patterns,
            ..Default::default()
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.paths.is_empty() {
        println!("Put the input dir name(s) as parameters");
        println!("{}", Args::command().render_usage());
        return;
    }

    logging::init(
        args.verbose,
        args.quiet,
        should_use_color(args.color, std::io::stderr().is_terminal()),
    );

    let output_root = match args.output_dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = GeneratorConfig {
        walker: args.walker_config(),
        output_root,
        ..Default::default()
    };

    let report = match generate(args.paths.as_slice(), &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("gitbook-gen: {}", e);
            process::exit(1);
        }
    };

    let printed = if args.json {
        print_report_json(&report)
    } else if args.report {
        print_report(
            &report,
            should_use_color(args.color, std::io::stdout().is_terminal()),
        )
    } else {
        Ok(())
    };

    if let Err(e) = printed {
        eprintln!("gitbook-gen: error writing output: {}", e);
        process::exit(1);
    }
}
