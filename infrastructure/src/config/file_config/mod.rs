//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and parsed into domain types on demand.

mod endpoint;
mod fetch;
mod output;
mod pool;

pub use endpoint::FileEndpointConfig;
pub use fetch::FileFetchConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use pool::FilePoolConfig;

use jokes_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that contains at least one error-severity issue
#[derive(Debug, Error)]
#[error("invalid configuration:\n  {}", .messages.join("\n  "))]
pub struct ConfigValidationError {
    pub messages: Vec<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Joke API endpoint
    pub endpoint: FileEndpointConfig,
    /// Count limits and default strategy
    pub fetch: FileFetchConfig,
    /// Worker pool sizing for the pooled strategy
    pub pool: FilePoolConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.endpoint.parse_endpoint().1);
        issues.extend(self.fetch.parse_strategy().1);
        issues.extend(self.fetch.validate_limits());
        issues.extend(self.pool.validate());
        issues
    }

    /// Fail if any issue is an error; warnings are returned for display.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError {
                messages: errors.into_iter().map(|issue| issue.message).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokes_domain::{ExecutionStrategy, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "http://localhost:8080/api?format=json"

[fetch]
default_count = 3
max_count = 20
strategy = "pooled"

[pool]
max_threads = 16
keep_alive_secs = 5

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.endpoint.parse_endpoint().0.url(),
            "http://localhost:8080/api?format=json"
        );
        assert_eq!(config.fetch.default_count, 3);
        assert_eq!(config.fetch.max_count, 20);
        assert_eq!(config.fetch.parse_strategy().0, ExecutionStrategy::Pooled);
        assert_eq!(config.pool.settings().max_threads, 16);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[fetch]\nmax_count = 50\n").unwrap();
        assert_eq!(config.fetch.max_count, 50);
        assert_eq!(config.fetch.default_count, 5);
        assert_eq!(config.endpoint, FileEndpointConfig::default());
        assert_eq!(config.pool, FilePoolConfig::default());
    }

    #[test]
    fn test_ensure_valid_collects_every_error() {
        let config: FileConfig = toml::from_str(
            r#"
[endpoint]
url = "nowhere"

[fetch]
strategy = "fibers"
"#,
        )
        .unwrap();

        let err = config.ensure_valid().unwrap_err();
        assert_eq!(err.messages.len(), 2);
        assert!(err.to_string().contains("endpoint.url"));
        assert!(err.to_string().contains("fetch.strategy"));
    }

    #[test]
    fn test_ensure_valid_passes_warnings_through() {
        let config: FileConfig = toml::from_str("[pool]\nkeep_alive_secs = 0\n").unwrap();
        let warnings = config.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
