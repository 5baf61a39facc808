//! CLI entrypoint for jokes-fanout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use jokes_application::{
    CompareStrategiesUseCase, FetchJokesInput, FetchJokesUseCase, FetchProgressNotifier,
    JokeClient, NoProgress,
};
use jokes_domain::{BatchSize, ExecutionStrategy, JokeEndpoint, OutputFormat};
use jokes_infrastructure::{
    BackendFactory, BlockingHttpJokeClient, ConfigLoader, HttpJokeClient, WorkerPool,
};
use jokes_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Everything `run` needs, resolved from CLI flags and configuration
struct RunPlan {
    count: BatchSize,
    strategy: ExecutionStrategy,
    compare: bool,
    format: OutputFormat,
    show_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    let endpoint = match &cli.endpoint {
        Some(url) => JokeEndpoint::new(url.as_str())?,
        None => config.endpoint.parse_endpoint().0,
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let plan = RunPlan {
        count: config.fetch.limits().resolve(cli.count)?,
        strategy: cli
            .strategy
            .map(ExecutionStrategy::from)
            .unwrap_or_else(|| config.fetch.parse_strategy().0),
        compare: cli.compare,
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        show_progress: !cli.quiet && config.output.show_progress,
    };

    info!("Starting jokes-fanout against {}", endpoint);

    // === Dependency Injection ===
    // The blocking client and the worker pool are built before any async
    // runtime is entered and released after it has shut down.
    let blocking: Arc<dyn JokeClient> = Arc::new(BlockingHttpJokeClient::new(endpoint.clone())?);
    let pool = Arc::new(
        WorkerPool::new(config.pool.settings()).context("Failed to start worker pool")?,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime.block_on(run(endpoint, Arc::clone(&blocking), Arc::clone(&pool), &plan));

    drop(runtime);
    drop(pool);
    result
}

async fn run(
    endpoint: JokeEndpoint,
    blocking: Arc<dyn JokeClient>,
    pool: Arc<WorkerPool>,
    plan: &RunPlan,
) -> Result<()> {
    let non_blocking = Arc::new(HttpJokeClient::new(endpoint)?);
    let factory = BackendFactory::new(blocking, non_blocking, pool);

    let progress: Box<dyn FetchProgressNotifier> = if !plan.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let progress = progress.as_ref();

    let input = FetchJokesInput::new(plan.count);

    if plan.compare {
        let use_case = CompareStrategiesUseCase::new(factory.build_all());
        let runs = use_case.execute_with_progress(input, progress).await;

        let output = match plan.format {
            OutputFormat::Text => ConsoleFormatter::format_comparison(&runs),
            OutputFormat::Json => ConsoleFormatter::format_comparison_json(&runs),
        };
        println!("{}", output);

        CompareStrategiesUseCase::ensure_all_succeeded(&runs)?;
        return Ok(());
    }

    let use_case = FetchJokesUseCase::new(factory.build(plan.strategy));
    let result = use_case.execute_with_progress(input, progress).await?;

    let output = match plan.format {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output);

    Ok(())
}
