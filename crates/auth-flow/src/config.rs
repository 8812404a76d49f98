//! Flow controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the session ping delay.
const ENV_SESSION_PING_DELAY: &str = "AUTH_FLOW_SESSION_PING_DELAY";

/// Polling is disabled for any configured delay below one minute.
const MIN_PING_DELAY_MINUTES: i64 = 1;

/// Controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Background session refresh interval in minutes. Values below 1
    /// disable polling.
    #[serde(default = "default_session_ping_delay")]
    pub session_ping_delay: i64,
}

fn default_session_ping_delay() -> i64 {
    -1
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            session_ping_delay: default_session_ping_delay(),
        }
    }
}

impl FlowConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.load_from_env();
        config
    }

    /// Apply environment overrides to this configuration.
    pub fn load_from_env(&mut self) {
        if let Ok(value) = std::env::var(ENV_SESSION_PING_DELAY) {
            if let Ok(minutes) = value.trim().parse() {
                self.session_ping_delay = minutes;
            }
        }
    }

    /// The polling period, or `None` when polling is disabled.
    pub fn ping_interval(&self) -> Option<Duration> {
        if self.session_ping_delay < MIN_PING_DELAY_MINUTES {
            return None;
        }
        Some(Duration::from_secs(self.session_ping_delay as u64 * 60))
    }
}
