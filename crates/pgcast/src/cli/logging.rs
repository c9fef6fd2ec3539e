//! Logging setup

use log::LevelFilter;

/// Environment variable overriding the default filter
pub const LOG_ENV: &str = "PGCAST_LOG";

/// Level for a `-v` count: warn, info, debug, trace
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `PGCAST_LOG` is applied first; `-v` flags win over it.
pub fn initialize(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_env(LOG_ENV);
    if verbosity > 0 {
        builder.filter_level(level_for(verbosity));
    }
    // A logger may already be installed when embedded.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
