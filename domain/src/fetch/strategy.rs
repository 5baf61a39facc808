//! Execution strategy definitions.
//!
//! Defines [`ExecutionStrategy`], the caller-selected concurrency mechanism for
//! a fan-out fetch:
//! - Threads: one OS thread per request, blocking client
//! - Pooled: tasks on a reusable worker pool, blocking client
//! - NonBlocking: futures on a non-blocking client, no thread per request

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::DomainError;

/// Concurrency mechanism used to run the requests of one batch.
///
/// All strategies produce the same observable result for the same input;
/// they differ only in how many threads are occupied while requests are in
/// flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionStrategy {
    /// One freshly spawned thread per request
    Threads,
    /// Requests submitted to a shared, growable worker pool
    Pooled,
    /// Requests issued through a non-blocking client and awaited together
    #[default]
    NonBlocking,
}

impl ExecutionStrategy {
    /// Every strategy, in the order they are usually compared
    pub const ALL: [ExecutionStrategy; 3] = [
        ExecutionStrategy::Threads,
        ExecutionStrategy::Pooled,
        ExecutionStrategy::NonBlocking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStrategy::Threads => "threads",
            ExecutionStrategy::Pooled => "pooled",
            ExecutionStrategy::NonBlocking => "non-blocking",
        }
    }

    /// Get a human-readable description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            ExecutionStrategy::Threads => "Threads: one new thread per request, blocking I/O",
            ExecutionStrategy::Pooled => "Pooled: tasks on a reusable worker pool, blocking I/O",
            ExecutionStrategy::NonBlocking => {
                "Non-blocking: futures multiplexed on a non-blocking client"
            }
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExecutionStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "threads" | "thread" | "withthreads" => Ok(ExecutionStrategy::Threads),
            "pooled" | "pool" | "executor" | "withexecutor" | "withexectutor" => {
                Ok(ExecutionStrategy::Pooled)
            }
            "non-blocking" | "nonblocking" | "non_blocking" | "async" | "webclient"
            | "withwebclient" => Ok(ExecutionStrategy::NonBlocking),
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for strategy in ExecutionStrategy::ALL {
            assert_eq!(
                strategy.to_string().parse::<ExecutionStrategy>().unwrap(),
                strategy
            );
        }
    }

    #[test]
    fn test_route_aliases() {
        assert_eq!(
            "withThreads".parse::<ExecutionStrategy>().unwrap(),
            ExecutionStrategy::Threads
        );
        assert_eq!(
            "withExecutor".parse::<ExecutionStrategy>().unwrap(),
            ExecutionStrategy::Pooled
        );
        assert_eq!(
            "withWebClient".parse::<ExecutionStrategy>().unwrap(),
            ExecutionStrategy::NonBlocking
        );
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "fibers".parse::<ExecutionStrategy>().unwrap_err();
        assert_eq!(err, DomainError::UnknownStrategy("fibers".to_string()));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&ExecutionStrategy::NonBlocking).unwrap();
        assert_eq!(json, "\"non-blocking\"");
        let parsed: ExecutionStrategy = serde_json::from_str("\"pooled\"").unwrap();
        assert_eq!(parsed, ExecutionStrategy::Pooled);
    }
}
