//! Output formatting for fetched jokes

pub mod console;
