//! Logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity when `RUST_LOG` is unset.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Log lines go to stderr so that stdout only
/// carries usage text and reports.
pub fn init(verbose: u8, quiet: bool, use_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .init();
}
