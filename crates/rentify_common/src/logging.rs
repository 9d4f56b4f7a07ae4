//! Logging utilities for the Rentify service.
//!
//! Every crate logs through `tracing` macros; this module owns the one place
//! where the subscriber is installed.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose default level follows the level passed to [`init_with_level`].
const RENTIFY_TARGETS: &[&str] = &[
    "rentify_backend",
    "rentify_inventory",
    "rentify_notion",
    "rentify_common",
    "rentify_config",
];

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use rentify_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are read first; the Rentify crates then get `level`.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in RENTIFY_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: a subscriber may already be installed (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parses a level name such as `"debug"`, falling back to INFO.
pub fn parse_level(value: &str) -> Level {
    value.parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_with_level(Level::DEBUG);
        init();
    }
}
