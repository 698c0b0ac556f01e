//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with diff text on stdout.

use tracing::level_filters::LevelFilter;

/// Environment variable that overrides the `-v` derived level
pub const LOG_ENV: &str = "GOLDRUN_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let level = resolve_level(verbose, std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn resolve_level(verbose: u8, env: Option<&str>) -> LevelFilter {
    if let Some(level) = env.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(resolve_level(0, None), LevelFilter::WARN);
        assert_eq!(resolve_level(1, None), LevelFilter::INFO);
        assert_eq!(resolve_level(2, None), LevelFilter::DEBUG);
        assert_eq!(resolve_level(7, None), LevelFilter::TRACE);
    }

    #[test]
    fn env_overrides_verbosity() {
        assert_eq!(resolve_level(0, Some("debug")), LevelFilter::DEBUG);
        assert_eq!(resolve_level(3, Some("error")), LevelFilter::ERROR);
    }

    #[test]
    fn unparsable_env_is_ignored() {
        assert_eq!(resolve_level(1, Some("loud")), LevelFilter::INFO);
    }
}
