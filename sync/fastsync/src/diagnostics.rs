use hearth_core::log::LogThrottler;
use log::Level;
use std::time::Duration;

/// Side channel for rate-limited diagnostic output. Emission is fire-and-forget
/// and must never influence selection or continuation decisions.
pub trait DiagnosticSink: Send + Sync {
    /// Emits `message` at `level` unless a message of the same `key` was
    /// already emitted within the last `min_interval`.
    fn emit_throttled(&self, level: Level, message: &str, key: &'static str, min_interval: Duration);
}

/// Routes throttled notifications to the process logger
#[derive(Default)]
pub struct ThrottledLogSink {
    throttler: LogThrottler,
}

impl ThrottledLogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for ThrottledLogSink {
    fn emit_throttled(&self, level: Level, message: &str, key: &'static str, min_interval: Duration) {
        if self.throttler.should_log(key, min_interval) {
            log::log!(level, "{}", message);
        }
    }
}
