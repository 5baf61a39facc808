//! Progress reporting while a batch is in flight

pub mod reporter;
