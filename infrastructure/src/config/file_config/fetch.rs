//! Fetch configuration from TOML (`[fetch]` section)

use jokes_application::FetchLimits;
use jokes_application::config::{DEFAULT_COUNT, DEFAULT_MAX_COUNT};
use jokes_domain::{ConfigIssue, ConfigIssueCode, ExecutionStrategy};
use serde::{Deserialize, Serialize};

/// Raw fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Jokes fetched when no count is given
    pub default_count: usize,
    /// Largest count accepted from the command line
    pub max_count: usize,
    /// Strategy used when none is given (threads, pooled, non-blocking)
    pub strategy: String,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            max_count: DEFAULT_MAX_COUNT,
            strategy: ExecutionStrategy::default().to_string(),
        }
    }
}

impl FileFetchConfig {
    pub fn limits(&self) -> FetchLimits {
        FetchLimits::new(self.default_count, self.max_count)
    }

    /// Parse the strategy string, falling back to the default on error
    pub fn parse_strategy(&self) -> (ExecutionStrategy, Vec<ConfigIssue>) {
        match self.strategy.parse() {
            Ok(strategy) => (strategy, vec![]),
            Err(_) => (
                ExecutionStrategy::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidValue {
                        field: "fetch.strategy".to_string(),
                        value: self.strategy.clone(),
                    },
                    format!(
                        "fetch.strategy: unknown value '{}' (expected threads, pooled or non-blocking)",
                        self.strategy
                    ),
                )],
            ),
        }
    }

    /// Check that the count limits are usable together
    pub fn validate_limits(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_count == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "fetch.max_count".to_string(),
                },
                "fetch.max_count must be at least 1",
            ));
        }

        if self.default_count == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "fetch.default_count".to_string(),
                },
                "fetch.default_count must be at least 1",
            ));
        } else if self.max_count > 0 && self.default_count > self.max_count {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "fetch.default_count".to_string(),
                },
                format!(
                    "fetch.default_count ({}) exceeds fetch.max_count ({})",
                    self.default_count, self.max_count
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileFetchConfig::default();
        assert!(config.validate_limits().is_empty());
        assert_eq!(config.parse_strategy().0, ExecutionStrategy::NonBlocking);
        assert_eq!(config.limits(), FetchLimits::default());
    }

    #[test]
    fn test_default_above_max() {
        let config = FileFetchConfig {
            default_count: 10,
            max_count: 5,
            ..Default::default()
        };
        let issues = config.validate_limits();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("exceeds"));
    }

    #[test]
    fn test_zero_counts() {
        let config = FileFetchConfig {
            default_count: 0,
            max_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate_limits().len(), 2);
    }

    #[test]
    fn test_unknown_strategy() {
        let config = FileFetchConfig {
            strategy: "green-threads".to_string(),
            ..Default::default()
        };
        let (strategy, issues) = config.parse_strategy();
        assert_eq!(strategy, ExecutionStrategy::default());
        assert_eq!(issues.len(), 1);
    }
}
