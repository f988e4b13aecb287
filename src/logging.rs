//! Diagnostic logging setup
//!
//! Logging is off unless `-v` is given or `RUST_LOG` is set. Events go to
//! stderr so they never interleave with the tree on stdout.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive for this crate.
fn directive_for(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("twig=debug"),
        _ => Some("twig=trace"),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the verbosity count when both are present.
pub fn init_logging(verbosity: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match directive_for(verbosity) {
            Some(directive) => EnvFilter::new(directive),
            None => return,
        },
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("twig: could not initialise logging: {}", e);
    }
}
