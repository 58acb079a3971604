//! Runtime settings for the player and the session registry

use std::time::Duration;

/// Default cap on replayable trace length
pub const DEFAULT_MAX_TRACE_STEPS: usize = 100_000;

/// Default idle expiry for registry sessions (30 minutes)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between auto-play steps
    pub play_interval_ms: u64,
    /// Longest trace the player accepts
    pub max_trace_steps: usize,
    /// Idle time after which a registry session expires
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.play_interval_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            play_interval_ms: 1000,
            max_trace_steps: DEFAULT_MAX_TRACE_STEPS,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}
