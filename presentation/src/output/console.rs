//! Console output formatter for fetched jokes

use colored::Colorize;
use jokes_application::{FetchJokesOutput, StrategyRun};

/// Formats fetched jokes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one batch as a numbered list
    pub fn format(output: &FetchJokesOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header(&format!(
            "{} jokes via {} ({} ms)",
            output.jokes.len(),
            output.strategy,
            output.elapsed_ms
        )));
        text.push('\n');

        let width = output.jokes.len().to_string().len();
        for (i, joke) in output.jokes.iter().enumerate() {
            let number = format!("{:>width$}.", i + 1, width = width);
            text.push_str(&format!("\n{} {}\n", number.yellow().bold(), joke.text()));
        }

        text
    }

    /// Format one batch as JSON
    pub fn format_json(output: &FetchJokesOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a strategy comparison as a table
    pub fn format_comparison(runs: &[StrategyRun]) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Strategy comparison"));
        text.push('\n');
        text.push_str(&format!(
            "\n{:<14} {:>10}  {}\n",
            "Strategy".cyan().bold(),
            "Time".cyan().bold(),
            "Result".cyan().bold()
        ));
        text.push_str(&format!("{}\n", "-".repeat(60)));

        for run in runs {
            let result = match (&run.jokes, &run.error) {
                (Some(jokes), _) => format!("{} jokes", jokes.len()).green().to_string(),
                (None, Some(error)) => format!("failed: {}", error).red().to_string(),
                (None, None) => "no result".dimmed().to_string(),
            };
            text.push_str(&format!(
                "{:<14} {:>7} ms  {}\n",
                run.strategy.as_str(),
                run.elapsed_ms,
                result
            ));
        }

        if let Some(fastest) = runs
            .iter()
            .filter(|r| r.success)
            .min_by_key(|r| r.elapsed_ms)
        {
            text.push_str(&format!(
                "\n{} {}\n",
                "Fastest:".green().bold(),
                fastest.strategy.description()
            ));
        }

        text
    }

    /// Format a strategy comparison as JSON
    pub fn format_comparison_json(runs: &[StrategyRun]) -> String {
        serde_json::to_string_pretty(runs).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        format!("{} {} {}", "===".cyan(), title.bold(), "===".cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokes_domain::{ExecutionStrategy, Joke, JokeBatch};

    fn output(texts: &[&str]) -> FetchJokesOutput {
        FetchJokesOutput {
            strategy: ExecutionStrategy::Pooled,
            jokes: texts.iter().map(|t| Joke::new(*t)).collect::<JokeBatch>(),
            elapsed_ms: 42,
            fetched_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_format_lists_every_joke() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&output(&["first", "second"]));
        assert!(text.contains("2 jokes via pooled (42 ms)"));
        assert!(text.contains("1. first"));
        assert!(text.contains("2. second"));
    }

    #[test]
    fn test_format_json_round_trips_jokes() {
        let json = ConsoleFormatter::format_json(&output(&["X"]));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["strategy"], "pooled");
        assert_eq!(value["jokes"][0]["joke"], "X");
        assert_eq!(value["elapsed_ms"], 42);
    }

    fn run(strategy: ExecutionStrategy, elapsed_ms: u64, ok: bool) -> StrategyRun {
        StrategyRun {
            strategy,
            success: ok,
            jokes: ok.then(|| ["X"].into_iter().map(Joke::from).collect()),
            error: (!ok).then(|| "1 of 1 requests failed".to_string()),
            elapsed_ms,
        }
    }

    #[test]
    fn test_format_comparison() {
        colored::control::set_override(false);
        let runs = vec![
            run(ExecutionStrategy::Threads, 30, true),
            run(ExecutionStrategy::Pooled, 10, false),
            run(ExecutionStrategy::NonBlocking, 20, true),
        ];

        let text = ConsoleFormatter::format_comparison(&runs);
        assert!(text.contains("threads"));
        assert!(text.contains("failed: 1 of 1 requests failed"));
        // The failed run is faster but is not eligible.
        assert!(text.contains(ExecutionStrategy::NonBlocking.description()));
    }

    #[test]
    fn test_format_comparison_json() {
        let runs = vec![run(ExecutionStrategy::Threads, 30, true)];
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_comparison_json(&runs)).unwrap();
        assert_eq!(value[0]["strategy"], "threads");
        assert_eq!(value[0]["success"], true);
    }
}
