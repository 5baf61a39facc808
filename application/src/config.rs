//! Application-level configuration.
//!
//! Boundary rules for how many jokes a caller may ask for. The fetcher
//! itself accepts any [`BatchSize`]; defaulting and capping happen here.

use jokes_domain::{BatchSize, DomainError};

/// Count used when the caller does not specify one
pub const DEFAULT_COUNT: usize = 5;

/// Largest count accepted from a caller unless configured otherwise
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Limits applied to caller-supplied joke counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    /// Count used when none is given
    pub default_count: usize,
    /// Largest count accepted
    pub max_count: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl FetchLimits {
    pub fn new(default_count: usize, max_count: usize) -> Self {
        Self {
            default_count,
            max_count,
        }
    }

    /// Resolve a caller-supplied count into a batch size.
    ///
    /// `None` falls back to `default_count`. Zero and anything above
    /// `max_count` are rejected.
    pub fn resolve(&self, requested: Option<usize>) -> Result<BatchSize, DomainError> {
        let count = requested.unwrap_or(self.default_count);
        if count > self.max_count {
            return Err(DomainError::CountAboveLimit {
                requested: count,
                max: self.max_count,
            });
        }
        BatchSize::new(count)
    }
}
