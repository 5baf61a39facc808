//! Core domain concepts shared across all layers.
//!
//! - [`joke::Joke`] — a single joke decoded from the joke API
//! - [`batch::BatchSize`] — a validated, positive number of jokes to fetch
//! - [`batch::JokeBatch`] — the unordered result of one fan-out
//! - [`error::DomainError`] — domain-level errors

pub mod batch;
pub mod error;
pub mod joke;
