use std::fs;

use tempfile::TempDir;
use tree_sort_bench::bench::export_csv;
use tree_sort_bench::{BenchConfig, BenchError, Category, DatasetKey, DatasetStore, plot, run};

fn small_config(temp: &TempDir) -> BenchConfig {
    BenchConfig {
        data_dir: temp.path().join("datasets"),
        min_size: 10,
        max_size: 50,
        step: 20,
        seed: Some(42),
        chart_path: temp.path().join("chart.svg"),
        csv_path: Some(temp.path().join("results.csv")),
        ..BenchConfig::default()
    }
}

#[test]
fn first_run_generates_and_benchmarks_everything() {
    let temp = TempDir::new().unwrap();
    let config = small_config(&temp);

    let results = run(&config).unwrap();

    // sizes 10, 30, 50 times three categories
    assert_eq!(results.len(), 9);
    for file in ["random_10.txt", "sorted_30.txt", "reverse_sorted_50.txt"] {
        assert!(config.data_dir.join(file).is_file(), "{}", file);
    }

    for r in &results {
        let n = r.size as u64;
        match r.category {
            // duplicates in ascending data still walk the whole right spine
            Category::Sorted => assert_eq!(r.iterations, n * (n - 1) / 2, "{:?}", r),
            _ => assert!(r.iterations <= n * (n - 1) / 2, "{:?}", r),
        }
    }

    let csv = fs::read_to_string(config.csv_path.as_ref().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 10);
    assert!(csv.lines().nth(1).unwrap().starts_with("10,random,"));
}

#[test]
fn same_multiset_in_every_category() {
    let temp = TempDir::new().unwrap();
    let config = small_config(&temp);
    run(&config).unwrap();

    let store = DatasetStore::new(&config.data_dir);
    let mut random = store.load(DatasetKey::new(Category::Random, 30)).unwrap();
    let sorted = store.load(DatasetKey::new(Category::Sorted, 30)).unwrap();
    let mut reverse = store.load(DatasetKey::new(Category::ReverseSorted, 30)).unwrap();

    random.sort();
    reverse.reverse();
    assert_eq!(random, sorted);
    assert_eq!(reverse, sorted);
    assert!(sorted.iter().all(|&v| (0..=config.max_value).contains(&v)));
}

#[test]
fn existing_directory_is_not_regenerated() {
    let temp = TempDir::new().unwrap();
    let config = small_config(&temp);
    let store = DatasetStore::new(&config.data_dir);

    fs::create_dir_all(&config.data_dir).unwrap();
    store.write(DatasetKey::new(Category::Sorted, 4), &[1, 2, 3, 4]).unwrap();

    let results = run(&config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].iterations, 6);
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn malformed_dataset_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let config = small_config(&temp);
    fs::create_dir_all(&config.data_dir).unwrap();
    fs::write(config.data_dir.join("random_3.txt"), "1,,2").unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, BenchError::Parse { .. }));
}

#[test]
fn invalid_sweep_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = BenchConfig {
        step: 0,
        ..small_config(&temp)
    };
    assert!(matches!(run(&config), Err(BenchError::InvalidSweep(_))));
    assert!(!config.data_dir.exists());
}

#[test]
fn charts_and_csv_written_from_results() {
    let temp = TempDir::new().unwrap();
    let config = small_config(&temp);
    let results = run(&config).unwrap();

    assert!(plot::draw_plots(&results, &config.chart_path).unwrap());
    let svg = fs::read_to_string(&config.chart_path).unwrap();
    for category in Category::ALL {
        assert!(svg.contains(&format!(">{}</text>", category)));
    }

    let csv_path = temp.path().join("again.csv");
    export_csv(&results, &csv_path).unwrap();
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        fs::read_to_string(config.csv_path.as_ref().unwrap()).unwrap()
    );
}
