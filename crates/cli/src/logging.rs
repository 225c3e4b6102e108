use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Environment variable that overrides the flag-derived log filter.
const LOG_ENV: &str = "ROSTER_LOG";

/// Install the global subscriber. Logs always go to stderr so they never
/// interleave with the prompts and tables on stdout.
pub fn configure(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
