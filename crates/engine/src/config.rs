//! Scheduler configuration loaded from the environment.

use std::env;
use std::time::Duration;

use gridwalk_types::{DEFAULT_CONSOLE_COLUMNS, DEFAULT_CONSOLE_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Screen buffer width.
    pub columns: u16,
    /// Screen buffer height. The terminal gets one extra row.
    pub rows: u16,
    /// Bounded wait of the update cadence's key poll.
    pub poll_interval: Duration,
    /// Minimum render frame time; `None` renders as fast as the backend flushes.
    pub frame_cap: Option<Duration>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_CONSOLE_COLUMNS,
            rows: DEFAULT_CONSOLE_ROWS,
            poll_interval: Duration::from_millis(1),
            frame_cap: None,
        }
    }
}

impl SchedulerConfig {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let columns = env_parse("GRIDWALK_CONSOLE_COLUMNS").unwrap_or(defaults.columns);
        let rows = env_parse("GRIDWALK_CONSOLE_ROWS").unwrap_or(defaults.rows);
        let poll_interval = env_parse("GRIDWALK_POLL_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);
        let frame_cap = env_parse::<u64>("GRIDWALK_FRAME_CAP_MS")
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis);

        Self {
            columns,
            rows,
            poll_interval,
            frame_cap,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
