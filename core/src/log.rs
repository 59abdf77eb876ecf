//! Logging facade and helpers shared by all Hearth crates.
//!
//! Crates log through the re-exported macros below so the logging backend can
//! be swapped in a single place. Binaries call [`try_init_logger`] once at
//! startup; library crates never initialize the global logger themselves.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Console log line pattern, with explicit UTC time zone denoted by the suffix Z
pub const LOG_LINE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)}Z [{h({({l}):5.5})}] {m}{n}";

/// Environment variable consulted for the default log level
pub const DEFAULT_LOGGER_ENV: &str = "RUST_LOG";

/// Tries to initialize the global logger with a console appender at the given
/// level filter (`"trace"`, `"debug"`, `"info"`, ...). Silently does nothing
/// if a logger is already installed, so tests may call it repeatedly.
#[cfg(not(target_arch = "wasm32"))]
pub fn try_init_logger(filters: &str) {
    use log::LevelFilter;
    use log4rs::{
        append::console::ConsoleAppender,
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };
    use std::str::FromStr;

    let level = LevelFilter::from_str(filters).unwrap_or(LevelFilter::Info);
    let console = ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN))).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(console)))
        .build(Root::builder().appender("stdout").build(level));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*);
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*);
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        log::error!($($arg)*);
    };
}

/// Interval-based rate limiter for repeated log messages, keyed by message class.
///
/// Each key owns an independent throttle window. The limiter only gates the act
/// of emitting a message; callers must never let it gate actual control flow.
#[derive(Default)]
pub struct LogThrottler {
    last_emission: Mutex<HashMap<&'static str, Instant>>,
}

impl LogThrottler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a message of class `key` may be emitted now, in which
    /// case a new throttle window of `min_interval` is started for that key.
    pub fn should_log(&self, key: &'static str, min_interval: Duration) -> bool {
        let mut slots = self.last_emission.lock();
        let now = Instant::now();
        match slots.get(key) {
            Some(last) if now.duration_since(*last) < min_interval => false,
            _ => {
                slots.insert(key, now);
                true
            }
        }
    }
}
