//! **HTTP joke clients** — blocking and non-blocking adapters for the joke API
//!
//! | Client | Port | Used by | Key Dependency |
//! |--------|------|---------|----------------|
//! | [`BlockingHttpJokeClient`] | [`JokeClient`](jokes_application::JokeClient) | threads, pooled | `reqwest::blocking` |
//! | [`HttpJokeClient`] | [`AsyncJokeClient`](jokes_application::AsyncJokeClient) | non-blocking | `reqwest` |
//!
//! Both send a plain `GET` to the configured [`JokeEndpoint`](jokes_domain::JokeEndpoint)
//! and decode `{"joke": "<text>"}`. Each client owns one connection pool and
//! is meant to be built once and shared across a whole run.
//!
//! # Runtime note
//!
//! The blocking client drives its own internal runtime. Build, call and drop
//! it on threads that are not async executor threads: plain `std::thread`s,
//! `spawn_blocking` workers, or `main` before a runtime is entered.

mod blocking;
mod client;
mod error;
mod response;

pub use blocking::BlockingHttpJokeClient;
pub use client::HttpJokeClient;
pub use error::HttpClientError;
