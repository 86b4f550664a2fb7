//! World configuration loaded from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use gridwalk_types::{
    DEFAULT_VIEW_COLUMNS, DEFAULT_VIEW_ROWS, DEFAULT_WORLD_COLUMNS, DEFAULT_WORLD_ROWS,
};

/// Dimensions and seed for a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    pub columns: usize,
    pub rows: usize,
    pub view_columns: usize,
    pub view_rows: usize,
    pub seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_WORLD_COLUMNS,
            rows: DEFAULT_WORLD_ROWS,
            view_columns: DEFAULT_VIEW_COLUMNS,
            view_rows: DEFAULT_VIEW_ROWS,
            seed: 1,
        }
    }
}

impl WorldConfig {
    pub fn new(columns: usize, rows: usize, view_columns: usize, view_rows: usize) -> Self {
        Self {
            columns,
            rows,
            view_columns,
            view_rows,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Create from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults; the seed falls
    /// back to the wall clock. Dimension validity is checked later, when the
    /// world is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = env_parse("GRIDWALK_SEED").unwrap_or_else(clock_seed);

        Self {
            columns: env_parse("GRIDWALK_WORLD_COLUMNS").unwrap_or(defaults.columns),
            rows: env_parse("GRIDWALK_WORLD_ROWS").unwrap_or(defaults.rows),
            view_columns: env_parse("GRIDWALK_VIEW_COLUMNS").unwrap_or(defaults.view_columns),
            view_rows: env_parse("GRIDWALK_VIEW_ROWS").unwrap_or(defaults.view_rows),
            seed,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_dimensions() {
        let cfg = WorldConfig::new(5, 5, 3, 3).with_seed(9);
        assert_eq!((cfg.columns, cfg.rows), (5, 5));
        assert_eq!((cfg.view_columns, cfg.view_rows), (3, 3));
        assert_eq!(cfg.seed, 9);
    }
}
