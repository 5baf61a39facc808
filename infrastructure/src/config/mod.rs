//! Configuration file loading for jokes-fanout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `JOKES_<SECTION>__<KEY>` (e.g. `JOKES_FETCH__MAX_COUNT=20`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./jokes.toml` or `./.jokes.toml`
//! 4. Global: `$XDG_CONFIG_HOME/jokes-fanout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileFetchConfig, FileOutputConfig,
    FileOutputFormat, FilePoolConfig,
};
pub use loader::ConfigLoader;
