//! Stderr logging behind the `log` facade.

use std::fmt::{self, Display};

use clap::ValueEnum;
use log::{LevelFilter, Log, Metadata, Record};

/// Log level argument for the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl Display for LogLevelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_level_filter().as_str().to_ascii_lowercase())
    }
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Routes `log` records at or above `level` to stderr. Only the first call installs the logger.
pub fn init(level: LogLevelArg) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum as _;
    use log::LevelFilter;

    use super::LogLevelArg;

    #[test]
    fn names_round_trip() {
        for level in LogLevelArg::value_variants() {
            let parsed = LogLevelArg::from_str(&level.to_string(), false).unwrap();
            assert_eq!(parsed, *level);
        }
        assert_eq!(LogLevelArg::default().to_level_filter(), LevelFilter::Warn);
    }
}
