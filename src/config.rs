use std::path::PathBuf;

use crate::Value;
use crate::data_gen::DEFAULT_MAX_VALUE;
use crate::error::{BenchError, Result};

pub const DEFAULT_DATA_DIR: &str = "datasets";
pub const DEFAULT_CHART_PATH: &str = "tree_sort_benchmark.svg";
pub const DEFAULT_MIN_SIZE: usize = 100;
pub const DEFAULT_MAX_SIZE: usize = 1000;
pub const DEFAULT_STEP: usize = 100;

/// Settings for one benchmark run.
///
/// `Default` reproduces the classic sweep: sizes 100..=1000 in steps of 100,
/// values in `[0, 10000]`, datasets under `./datasets`.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub data_dir: PathBuf,
    pub min_size: usize,
    pub max_size: usize,
    pub step: usize,
    pub max_value: Value,
    pub seed: Option<u64>,
    pub chart_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            step: DEFAULT_STEP,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            csv_path: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(BenchError::InvalidSweep("step must be positive".into()));
        }
        if self.min_size == 0 {
            return Err(BenchError::InvalidSweep("min size must be positive".into()));
        }
        if self.min_size > self.max_size {
            return Err(BenchError::InvalidSweep(format!(
                "min size {} exceeds max size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_value < 0 {
            return Err(BenchError::InvalidSweep(format!(
                "max value {} is negative",
                self.max_value
            )));
        }
        Ok(())
    }

    pub fn sizes(&self) -> Vec<usize> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.min_size..=self.max_size).step_by(self.step).collect()
    }
}
