use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use tree_sort_bench::config::{
    DEFAULT_CHART_PATH, DEFAULT_DATA_DIR, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_STEP,
};
use tree_sort_bench::data_gen::DEFAULT_MAX_VALUE;
use tree_sort_bench::{BenchConfig, plot};

#[derive(Parser, Debug)]
#[command(
    name = "tree-sort-bench",
    about = "Benchmark an unbalanced BST sort on random, sorted and reverse-sorted data"
)]
struct Cli {
    /// Directory holding `<category>_<size>.txt` datasets (generated if missing).
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Smallest dataset size to generate.
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    min_size: usize,
    /// Largest dataset size to generate.
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
    /// Size increment between datasets.
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: usize,
    /// Upper bound (inclusive) of generated values.
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    max_value: i64,
    /// Seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,
    /// Where to write the SVG charts.
    #[arg(long, default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,
    /// Also export results as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        BenchConfig {
            data_dir: cli.data_dir,
            min_size: cli.min_size,
            max_size: cli.max_size,
            step: cli.step,
            max_value: cli.max_value,
            seed: cli.seed,
            chart_path: cli.chart,
            csv_path: cli.csv,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BenchConfig::from(cli);
    let results = tree_sort_bench::run(&config).context("benchmark run failed")?;

    println!("Drawing charts...");
    let written = plot::draw_plots(&results, &config.chart_path)
        .with_context(|| format!("failed to write charts to {}", config.chart_path.display()))?;
    if written {
        println!("Charts saved to {}", config.chart_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_match_default_config() {
        let cli = Cli::try_parse_from(["tree-sort-bench"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(BenchConfig::from(cli), BenchConfig::default());
    }

    #[test]
    fn test_repeated_verbose_flag() {
        let cli = Cli::try_parse_from(["tree-sort-bench", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "tree-sort-bench",
            "--min-size",
            "10",
            "--max-size",
            "30",
            "--step",
            "10",
            "--seed",
            "9",
            "--csv",
            "out.csv",
        ])
        .unwrap();
        let config = BenchConfig::from(cli);
        assert_eq!(config.sizes(), vec![10, 20, 30]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.csv_path, Some(PathBuf::from("out.csv")));
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
