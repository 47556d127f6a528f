//! Logging setup for the `d2o` binary.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "D2O_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(silent: bool, verbose: bool) -> Self {
        if silent {
            Verbosity::Silent
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn default_directive(self) -> &'static str {
        match self {
            Verbosity::Silent => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Installs the global subscriber. `D2O_LOG` wins over the flags unless
/// `--silent` or `--verbose` was given. Calling it twice is a no-op.
pub fn init(verbosity: Verbosity) {
    let filter = match (verbosity, std::env::var(LOG_ENV)) {
        (Verbosity::Normal, Ok(directives)) => EnvFilter::new(directives),
        (verbosity, _) => EnvFilter::new(verbosity.default_directive()),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_wins_over_verbose() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Silent);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
