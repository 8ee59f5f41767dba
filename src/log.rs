//! Leveled diagnostics on stderr
//!
//! Every line is `name:LEVEL message`. The floor for trace and debug is
//! decided once at start-up from [`HarnessConfig`]; Info and above always
//! print on the active sink. Code that should stay quiet gets [`NullLog`]
//! injected instead.

use crate::config::HarnessConfig;
use std::fmt;

/// Diagnostic severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        };
        f.write_str(tag)
    }
}

/// Where the helpers send their diagnostic lines.
pub trait Diagnostics {
    fn log(&self, level: Level, msg: &str);

    fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    fn fatal(&self, msg: &str) {
        self.log(Level::Fatal, msg);
    }
}

/// Active logger: writes to stderr, dropping lines below the floor.
#[derive(Debug, Clone)]
pub struct StderrLog {
    name: String,
    floor: Level,
}

impl StderrLog {
    pub fn new(name: &str, floor: Level) -> Self {
        StderrLog {
            name: name.to_string(),
            floor,
        }
    }

    /// Resolve the floor from the start-up switches.
    pub fn from_config(name: &str, config: &HarnessConfig) -> Self {
        let floor = if config.trace {
            Level::Trace
        } else if config.debug {
            Level::Debug
        } else {
            Level::Info
        };
        Self::new(name, floor)
    }

    pub fn floor(&self) -> Level {
        self.floor
    }

    /// Whether a line at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.floor
    }
}

impl Diagnostics for StderrLog {
    fn log(&self, level: Level, msg: &str) {
        if self.enabled(level) {
            eprintln!("{}:{} {}", self.name, level, msg);
        }
    }
}

/// Discarding logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl Diagnostics for NullLog {
    fn log(&self, _level: Level, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn level_tags() {
        assert_eq!(Level::Trace.to_string(), "TRACE");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn default_floor_is_info() {
        let log = StderrLog::from_config("runcheck", &HarnessConfig::default());
        assert_eq!(log.floor(), Level::Info);
        assert!(!log.enabled(Level::Debug));
        assert!(log.enabled(Level::Info));
        assert!(log.enabled(Level::Fatal));
    }

    #[test]
    fn debug_switch_lowers_floor() {
        let config = HarnessConfig {
            trace: false,
            debug: true,
        };
        let log = StderrLog::from_config("runcheck", &config);
        assert_eq!(log.floor(), Level::Debug);
        assert!(!log.enabled(Level::Trace));
    }

    #[test]
    fn trace_switch_enables_everything() {
        let config = HarnessConfig {
            trace: true,
            debug: true,
        };
        let log = StderrLog::from_config("runcheck", &config);
        assert!(log.enabled(Level::Trace));
    }

    #[test]
    fn null_log_discards() {
        // Nothing observable; this pins the trait impl down
        NullLog.fatal("dropped");
    }
}
