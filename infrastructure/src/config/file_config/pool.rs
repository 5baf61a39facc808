//! Worker pool configuration from TOML (`[pool]` section)

use crate::concurrency::PoolSettings;
use jokes_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw worker pool configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePoolConfig {
    /// Ceiling on simultaneously live pool workers
    pub max_threads: usize,
    /// Seconds an idle worker is kept before it is reclaimed
    pub keep_alive_secs: u64,
}

impl Default for FilePoolConfig {
    fn default() -> Self {
        let defaults = PoolSettings::default();
        Self {
            max_threads: defaults.max_threads,
            keep_alive_secs: defaults.keep_alive.as_secs(),
        }
    }
}

impl FilePoolConfig {
    pub fn settings(&self) -> PoolSettings {
        PoolSettings {
            max_threads: self.max_threads.max(1),
            keep_alive: Duration::from_secs(self.keep_alive_secs),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_threads == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "pool.max_threads".to_string(),
                },
                "pool.max_threads must be at least 1",
            ));
        }
        if self.keep_alive_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "pool.keep_alive_secs".to_string(),
                },
                "pool.keep_alive_secs is 0: idle workers are reclaimed immediately and never reused",
            ));
        }
        issues
    }
}
