use clap::Parser;
use pr_fixtures::{config, render};
use std::path::PathBuf;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// pr-fixtures — build GitHub pull request review fixtures shaped like the
/// GraphQL API response and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "pr-fixtures", version, about)]
struct Cli {
    /// Scenario file (TOML) describing reviews, threads and comments
    ///
    /// Defaults to .pr-fixtures.toml in the current directory, or an empty
    /// pull request when that file doesn't exist.
    scenario: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print a human-readable summary to stderr
    #[arg(long)]
    summary: bool,

    /// Use the built-in demo scenario
    #[arg(long, conflicts_with = "scenario")]
    demo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = if cli.demo {
        info!("using built-in demo scenario");
        config::Config::parse(include_str!("../tests/fixtures/demo_scenario.toml"))?
    } else if let Some(path) = cli.scenario.as_deref() {
        let _span = info_span!("scenario", path = %path.display()).entered();
        info!("loading scenario file");
        config::Config::load_from(path)?
    } else {
        info!("loading default scenario");
        config::Config::load()?
    };
    debug!(reviews = scenario.reviews.len(), threads = scenario.threads.len(), "scenario ready");

    let pull_request = scenario.build_pull_request();

    if cli.summary {
        render::print_summary(&pull_request);
    }
    render::output(&pull_request, cli.output.as_deref(), !cli.compact)?;
    info!("done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["pr-fixtures"]).unwrap();
        assert!(cli.scenario.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.compact);
        assert!(!cli.summary);
        assert!(!cli.demo);
    }

    #[test]
    fn test_scenario_with_output_and_compact() {
        let cli = Cli::try_parse_from([
            "pr-fixtures",
            "scenario.toml",
            "-o",
            "out.json",
            "--compact",
            "--summary",
        ])
        .unwrap();
        assert_eq!(cli.scenario, Some(PathBuf::from("scenario.toml")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.compact);
        assert!(cli.summary);
    }

    #[test]
    fn test_long_output_flag() {
        let cli = Cli::try_parse_from(["pr-fixtures", "--demo", "--output", "demo.json"]).unwrap();
        assert!(cli.demo);
        assert_eq!(cli.output, Some(PathBuf::from("demo.json")));
    }

    #[test]
    fn test_demo_conflicts_with_scenario() {
        let err = Cli::try_parse_from(["pr-fixtures", "--demo", "scenario.toml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
