use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::Value;
use crate::data_gen::Category;
use crate::dataset::{DatasetKey, DatasetStore};
use crate::error::{BenchError, Result};
use crate::tree_sort::tree_sort;

/// Outcome of sorting one dataset once.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchResult {
    pub size: usize,
    pub category: Category,
    pub elapsed: Duration,
    pub iterations: u64,
}

impl BenchResult {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// One report line, time in seconds with six decimals.
    pub fn summary_line(&self) -> String {
        format!(
            "Size: {}, Type: {}, Time: {:.6}s, Iterations: {}",
            self.size,
            self.category,
            self.seconds(),
            self.iterations
        )
    }
}

/// Times a single `tree_sort` call on a copy of `values`.
pub fn run_once(size: usize, category: Category, values: &[Value]) -> BenchResult {
    let data = values.to_vec();

    let start = Instant::now();
    let (sorted, iterations) = tree_sort(&data);
    let elapsed = start.elapsed();

    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    debug!(size, %category, iterations, elapsed_us = elapsed.as_micros() as u64, "sorted dataset");

    BenchResult {
        size,
        category,
        elapsed,
        iterations,
    }
}

/// Benchmarks every dataset in `store`: sizes ascending, categories in
/// [`Category::ALL`] order, missing files skipped.
pub fn measure_performance(store: &DatasetStore) -> Result<Vec<BenchResult>> {
    measure_performance_with(store, |_| {})
}

/// Same as [`measure_performance`], handing each result to `on_result` as
/// soon as it is recorded.
pub fn measure_performance_with<F>(store: &DatasetStore, mut on_result: F) -> Result<Vec<BenchResult>>
where
    F: FnMut(&BenchResult),
{
    let available: BTreeSet<DatasetKey> = store.list()?.into_iter().collect();
    let sizes: BTreeSet<usize> = available.iter().map(|k| k.size).collect();
    info!(datasets = available.len(), sizes = sizes.len(), "measuring performance");

    let mut results = Vec::with_capacity(available.len());
    for &size in &sizes {
        for category in Category::ALL {
            let key = DatasetKey::new(category, size);
            if !available.contains(&key) {
                debug!(file = %key.file_name(), "dataset missing, skipping");
                continue;
            }

            let values = store.load(key)?;
            let result = run_once(size, category, &values);
            on_result(&result);
            results.push(result);
        }
    }

    Ok(results)
}

pub fn results_to_csv(results: &[BenchResult]) -> String {
    let mut csv = String::from("size,category,time_s,iterations\n");
    for r in results {
        csv.push_str(&format!(
            "{},{},{:.6},{}\n",
            r.size,
            r.category,
            r.seconds(),
            r.iterations
        ));
    }
    csv
}

pub fn export_csv(results: &[BenchResult], path: &Path) -> Result<()> {
    fs::write(path, results_to_csv(results)).map_err(|e| BenchError::io(path, e))?;
    info!(file = %path.display(), rows = results.len(), "exported results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result(size: usize, category: Category, iterations: u64) -> BenchResult {
        BenchResult {
            size,
            category,
            elapsed: Duration::from_micros(1_500),
            iterations,
        }
    }

    #[test]
    fn test_summary_line() {
        let line = result(100, Category::ReverseSorted, 4950).summary_line();
        assert_eq!(line, "Size: 100, Type: reverse_sorted, Time: 0.001500s, Iterations: 4950");
    }

    #[test]
    fn test_run_once_counts() {
        let values: Vec<Value> = (0..100).collect();
        let r = run_once(100, Category::Sorted, &values);
        assert_eq!(r.iterations, 100 * 99 / 2);
    }

    #[test]
    fn test_measure_order_and_gaps() {
        let temp = TempDir::new().unwrap();
        let store = DatasetStore::new(temp.path());
        store.write(DatasetKey::new(Category::Sorted, 20), &(0..20).collect::<Vec<Value>>()).unwrap();
        store.write(DatasetKey::new(Category::Random, 20), &[3, 1, 2]).unwrap();
        store.write(DatasetKey::new(Category::ReverseSorted, 10), &(0..10).rev().collect::<Vec<Value>>()).unwrap();

        let mut seen = 0;
        let results = measure_performance_with(&store, |_| seen += 1).unwrap();
        assert_eq!(seen, 3);

        let order: Vec<(usize, Category)> = results.iter().map(|r| (r.size, r.category)).collect();
        assert_eq!(
            order,
            vec![
                (10, Category::ReverseSorted),
                (20, Category::Random),
                (20, Category::Sorted),
            ]
        );
        assert_eq!(results[0].iterations, 45);
        assert_eq!(results[2].iterations, 190);
    }

    #[test]
    fn test_malformed_dataset_propagates() {
        let temp = TempDir::new().unwrap();
        let store = DatasetStore::new(temp.path());
        fs::write(temp.path().join("random_5.txt"), "1,2,three").unwrap();

        let err = measure_performance(&store).unwrap_err();
        assert!(matches!(err, BenchError::Parse { .. }));
    }

    #[test]
    fn test_zero_padded_names_are_skipped() {
        let temp = TempDir::new().unwrap();
        let store = DatasetStore::new(temp.path());
        fs::write(temp.path().join("random_05.txt"), "5,4,3,2,1").unwrap();
        fs::write(temp.path().join("sorted_+4.txt"), "1,2,3,4").unwrap();

        assert!(measure_performance(&store).unwrap().is_empty());
    }

    #[test]
    fn test_csv() {
        let csv = results_to_csv(&[result(100, Category::Random, 700)]);
        assert_eq!(csv, "size,category,time_s,iterations\n100,random,0.001500,700\n");
    }
}
