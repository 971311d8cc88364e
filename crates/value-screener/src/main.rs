//! value-screener: rank a batch of indicator snapshots and print the top stocks.
//!
//! Reads a JSON array of `ScoringIndicator` records, runs the exclusion,
//! trap screen and scoring pipeline for one period type, and writes the
//! result to stdout as JSON.
//!
//! Usage:
//!   cargo run -p value-screener -- indicators.json
//!   cargo run -p value-screener -- indicators.json --period long_term --limit 20
//!   cargo run -p value-screener -- indicators.json --report   # include exclusions
//!
//! Environment (a `.env` file is honored):
//!   SCORING_CONFIG_PATH  JSON config overriding the built-in thresholds and weights
//!   SCREENER_PERIOD      default period when `--period` is absent
//!   SCREENER_LIMIT       default limit when `--limit` is absent

use anyhow::{bail, Context};
use scoring_core::{PeriodType, ScoringConfigSet, ScoringIndicator};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use value_ranker::ValueStockRanker;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, PartialEq)]
struct ScreenerArgs {
    input: PathBuf,
    period: PeriodType,
    limit: usize,
    report: bool,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// Flags win over environment variables, which win over defaults.
fn parse_args(
    args: &[String],
    env_period: Option<String>,
    env_limit: Option<String>,
) -> anyhow::Result<ScreenerArgs> {
    let report = args.iter().any(|a| a == "--report");

    let period = match flag_value(args, "--period").map(str::to_string).or(env_period) {
        Some(raw) => raw
            .parse::<PeriodType>()
            .with_context(|| format!("Invalid period '{}'", raw))?,
        None => PeriodType::MidTerm,
    };

    let limit = match flag_value(args, "--limit").map(str::to_string).or(env_limit) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Invalid limit '{}'", raw))?,
        None => DEFAULT_LIMIT,
    };

    // First argument that is neither a flag nor a flag's value
    let mut input = None;
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--period" | "--limit" => skip_next = true,
            "--report" => {}
            other if other.starts_with("--") => bail!("Unknown flag '{}'", other),
            other => {
                input = Some(PathBuf::from(other));
                break;
            }
        }
    }

    let Some(input) = input else {
        bail!("Usage: value-screener <indicators.json> [--period mid_term|long_term] [--limit N] [--report]");
    };

    Ok(ScreenerArgs {
        input,
        period,
        limit,
        report,
    })
}

fn load_config() -> anyhow::Result<ScoringConfigSet> {
    match std::env::var("SCORING_CONFIG_PATH") {
        Ok(path) => {
            tracing::info!("Loading scoring config from {}", path);
            ScoringConfigSet::from_path(&path)
                .with_context(|| format!("Failed to load scoring config from {}", path))
        }
        Err(_) => Ok(ScoringConfigSet::default()),
    }
}

fn load_indicators(path: &Path) -> anyhow::Result<Vec<ScoringIndicator>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "value_screener=info,value_ranker=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(
        &args,
        std::env::var("SCREENER_PERIOD").ok(),
        std::env::var("SCREENER_LIMIT").ok(),
    )?;

    let configs = load_config()?;
    let indicators = load_indicators(&args.input)?;
    tracing::info!(
        "Loaded {} indicator records from {}",
        indicators.len(),
        args.input.display()
    );

    let config = Arc::new(configs.for_period(args.period).clone());
    let ranker = ValueStockRanker::new(config, args.period);
    let outcome = ranker.rank(&indicators, args.limit);

    for trap in &outcome.traps {
        tracing::info!("{} excluded: {}", trap.ticker, trap.reason_messages().join("; "));
    }

    let json = if args.report {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome.ranked)?
    };
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        std::iter::once("value-screener")
            .chain(items.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(&argv(&["stocks.json"]), None, None).unwrap();
        assert_eq!(
            parsed,
            ScreenerArgs {
                input: PathBuf::from("stocks.json"),
                period: PeriodType::MidTerm,
                limit: DEFAULT_LIMIT,
                report: false,
            }
        );
    }

    #[test]
    fn test_flags_override_environment() {
        let parsed = parse_args(
            &argv(&["--period", "long", "stocks.json", "--limit", "3", "--report"]),
            Some("mid_term".to_string()),
            Some("50".to_string()),
        )
        .unwrap();
        assert_eq!(parsed.period, PeriodType::LongTerm);
        assert_eq!(parsed.limit, 3);
        assert!(parsed.report);
        assert_eq!(parsed.input, PathBuf::from("stocks.json"));
    }

    #[test]
    fn test_environment_fallback() {
        let parsed = parse_args(
            &argv(&["stocks.json"]),
            Some("long_term".to_string()),
            Some("25".to_string()),
        )
        .unwrap();
        assert_eq!(parsed.period, PeriodType::LongTerm);
        assert_eq!(parsed.limit, 25);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_args(&argv(&[]), None, None).is_err());
        assert!(parse_args(&argv(&["stocks.json", "--limit", "ten"]), None, None).is_err());
        assert!(parse_args(&argv(&["stocks.json", "--period", "weekly"]), None, None).is_err());
        assert!(parse_args(&argv(&["stocks.json", "--verbose"]), None, None).is_err());
    }
}
