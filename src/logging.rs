//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `toolshed=debug`
pub const LOG_ENV: &str = "TOOLSHED_LOG";

/// Filter used when `TOOLSHED_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "toolshed=debug,warn"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("toolshed=debug"));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
