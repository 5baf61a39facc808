//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod concurrency;
pub mod joke_client;
pub mod progress;
