//! Use cases (application services)

pub mod compare_strategies;
pub mod fetch_jokes;
