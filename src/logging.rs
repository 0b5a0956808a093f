//! `tracing` subscriber setup for binaries and tests.
//!
//! The library only emits events; installing a subscriber is the caller's
//! choice. Filter resolution order: explicit directive, then `RUST_LOG`,
//! then [`DEFAULT_DIRECTIVE`].

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter for `directives` (e.g. `"djsim=debug"`).
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns `false` if a subscriber was already installed; calling it twice is harmless.
pub fn init_tracing(directives: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directive_wins() {
        let filter = env_filter(Some("djsim=trace"));
        assert!(filter.to_string().contains("djsim=trace"));
    }

    #[test]
    fn test_invalid_directive_falls_back() {
        // Unparseable explicit directive must not panic.
        let _ = env_filter(Some("djsim=notalevel"));
    }

    #[test]
    fn test_init_is_idempotent() {
        let _ = init_tracing(Some("warn"));
        assert!(!init_tracing(Some("warn")));
    }
}
