/// Tracing setup and a small timing guard.
use std::io::IsTerminal;
use std::time::Instant;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_VAR: &str = "SSMOCK_LOG";

/// Filter used when `SSMOCK_LOG` is unset. Off unless `--debug` is given.
#[must_use]
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "ssmock_manage=debug" } else { "off" }
}

/// Install the global subscriber, writing to stderr.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Logs the elapsed time at debug level when dropped.
pub struct DebugTimer {
    label: &'static str,
    start: Instant,
}

impl DebugTimer {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(elapsed_ms = ms, "{}", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "off");
        assert_eq!(default_directive(true), "ssmock_manage=debug");
    }

    #[test]
    fn test_directives_parse() {
        for debug in [false, true] {
            assert!(
                default_directive(debug)
                    .parse::<tracing_subscriber::filter::Directive>()
                    .is_ok()
            );
        }
    }
}
