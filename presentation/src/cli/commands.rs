//! CLI command definitions

use clap::{Parser, ValueEnum};
use jokes_domain::ExecutionStrategy;
use std::path::PathBuf;

/// Output format for fetched jokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list of jokes
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for jokes_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => jokes_domain::OutputFormat::Text,
            OutputFormat::Json => jokes_domain::OutputFormat::Json,
        }
    }
}

/// Concurrency strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliStrategy {
    /// One new thread per request
    #[value(alias = "thread")]
    Threads,
    /// Tasks on a reusable worker pool
    #[value(alias = "pool", alias = "executor")]
    Pooled,
    /// Futures on a non-blocking client
    #[value(alias = "async", alias = "webclient")]
    NonBlocking,
}

impl From<CliStrategy> for ExecutionStrategy {
    fn from(strategy: CliStrategy) -> Self {
        match strategy {
            CliStrategy::Threads => ExecutionStrategy::Threads,
            CliStrategy::Pooled => ExecutionStrategy::Pooled,
            CliStrategy::NonBlocking => ExecutionStrategy::NonBlocking,
        }
    }
}

/// CLI arguments for jokes-fanout
#[derive(Parser, Debug)]
#[command(name = "jokes-fanout")]
#[command(author, version, about = "Fetch jokes concurrently with threads, a worker pool, or async I/O")]
#[command(long_about = r#"
jokes-fanout fetches N jokes from a public joke API at the same time and
prints them. The same batch can be run with three concurrency strategies:

1. threads:       one new OS thread per request, blocking HTTP client
2. pooled:        tasks on a shared, growable worker pool, blocking HTTP client
3. non-blocking:  futures on a non-blocking HTTP client, no thread per request

If any single request fails, the whole batch fails.

Configuration files are loaded from (in priority order):
1. JOKES_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./jokes.toml        Project-level config
4. ~/.config/jokes-fanout/config.toml   Global config

Example:
  jokes-fanout
  jokes-fanout -n 10 --strategy threads
  jokes-fanout -n 20 --compare
"#)]
pub struct Cli {
    /// Number of jokes to fetch (default from config, normally 5)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Concurrency strategy (default from config, normally non-blocking)
    #[arg(short, long, value_enum)]
    pub strategy: Option<CliStrategy>,

    /// Run the batch with every strategy and compare timings
    #[arg(long, conflicts_with = "strategy")]
    pub compare: bool,

    /// Override the joke API URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format (default from config, normally text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
