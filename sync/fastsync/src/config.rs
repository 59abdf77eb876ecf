use std::time::Duration;

/// Maximum number of header query retries against a single candidate peer
pub const MAX_QUERY_RETRIES_PER_PEER: u32 = 5;

/// Overall timeout for one pivot confirmation query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Tuning knobs for sync target selection and confirmation
#[derive(Debug, Clone)]
pub struct FastSyncConfig {
    /// Retry budget handed to the header fetch primitive for each confirmation attempt
    pub max_query_retries_per_peer: u32,

    /// Overall timeout for a single confirmation query
    pub query_timeout: Duration,

    /// Upper bound on confirmation retries caused by concurrent pivot changes.
    /// Exhausting it rejects the candidate without penalty.
    pub max_pivot_churn_retries: u32,

    /// Throttle window for the debug-level "unable to find sync target" notice
    pub no_target_debug_interval: Duration,

    /// Throttle window for the info-level "unable to find sync target" notice
    pub no_target_info_interval: Duration,

    /// Delay between selection attempts while searching for a sync target
    pub peer_wait_interval: Duration,
}

impl Default for FastSyncConfig {
    fn default() -> Self {
        Self {
            max_query_retries_per_peer: MAX_QUERY_RETRIES_PER_PEER,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            max_pivot_churn_retries: 16,
            no_target_debug_interval: Duration::from_secs(15),
            no_target_info_interval: Duration::from_secs(120),
            peer_wait_interval: Duration::from_secs(5),
        }
    }
}
