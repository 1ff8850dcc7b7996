//! `RUST_LOG` threshold for the dashboard activity log
//!
//! Events carry a `log::Level`; the first `RUST_LOG` directive decides which
//! of the quieter ones reach the panel.

use log::{Level, LevelFilter};
use std::env;
use std::str::FromStr;

/// Threshold from `RUST_LOG`, `info` when unset.
pub fn rust_log_threshold() -> LevelFilter {
    env::var("RUST_LOG")
        .map(|value| parse_threshold(&value))
        .unwrap_or(LevelFilter::Info)
}

/// Level of the first directive: `debug`, `benefitx=debug,reqwest=info`, ...
pub fn parse_threshold(rust_log: &str) -> LevelFilter {
    let directive = rust_log.split(',').next().unwrap_or_default();
    let level = directive.rsplit('=').next().unwrap_or_default().trim();
    if level.eq_ignore_ascii_case("warning") {
        return LevelFilter::Warn;
    }
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

pub fn passes(level: Level, threshold: LevelFilter) -> bool {
    level <= threshold
}

pub fn passes_env_threshold(level: Level) -> bool {
    passes(level, rust_log_threshold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("debug"), LevelFilter::Debug);
        assert_eq!(parse_threshold("WARNING"), LevelFilter::Warn);
        assert_eq!(parse_threshold("off"), LevelFilter::Off);
        assert_eq!(parse_threshold("benefitx=trace"), LevelFilter::Trace);
        assert_eq!(
            parse_threshold("benefitx=error,reqwest=debug"),
            LevelFilter::Error
        );
        assert_eq!(parse_threshold("benefitx"), LevelFilter::Info);
        assert_eq!(parse_threshold(""), LevelFilter::Info);
    }

    #[test]
    fn test_passes() {
        assert!(passes(Level::Error, LevelFilter::Debug));
        assert!(passes(Level::Warn, LevelFilter::Warn));
        assert!(!passes(Level::Debug, LevelFilter::Info));
        assert!(!passes(Level::Error, LevelFilter::Off));
    }
}
