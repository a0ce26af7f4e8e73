pub mod bench;
pub mod config;
pub mod data_gen;
pub mod dataset;
pub mod error;
pub mod plot;
pub mod tree_sort;

pub use bench::{BenchResult, measure_performance};
pub use config::BenchConfig;
pub use data_gen::Category;
pub use dataset::{DatasetKey, DatasetStore};
pub use error::BenchError;
pub use tree_sort::{SortTree, tree_sort};

pub type Value = i64;

/// Generates datasets if the directory is missing, benchmarks all of them
/// (printing one line per run) and returns the results.
pub fn run(config: &BenchConfig) -> error::Result<Vec<BenchResult>> {
    config.validate()?;

    let store = DatasetStore::new(&config.data_dir);
    let mut rng = data_gen::make_rng(config.seed);
    if store.ensure_generated(&mut rng, &config.sizes(), config.max_value)? {
        println!("Generated datasets in {}", store.dir().display());
    }

    println!("Measuring performance...");
    let results = bench::measure_performance_with(&store, |r| println!("{}", r.summary_line()))?;

    if let Some(csv_path) = &config.csv_path {
        bench::export_csv(&results, csv_path)?;
    }

    Ok(results)
}
