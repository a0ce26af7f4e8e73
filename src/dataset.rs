use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::Value;
use crate::data_gen::{Category, generate_set_with};
use crate::error::{BenchError, Result};

/// `(category, size)` pair identifying one dataset file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetKey {
    pub category: Category,
    pub size: usize,
}

impl DatasetKey {
    pub fn new(category: Category, size: usize) -> Self {
        Self { category, size }
    }

    /// `<category>_<size>.txt`
    pub fn file_name(&self) -> String {
        format!("{}_{}.txt", self.category, self.size)
    }

    pub fn parse_file_name(name: &str) -> Result<Self> {
        let bad = || BenchError::BadFileName(name.to_string());

        let stem = name.strip_suffix(".txt").ok_or_else(bad)?;
        // category names contain underscores, the size never does
        let (category, size) = stem.rsplit_once('_').ok_or_else(bad)?;
        let category = category.parse::<Category>().map_err(|_| bad())?;
        let size = size.parse::<usize>().map_err(|_| bad())?;

        // `05` and `+4` parse, but would load a different file
        let key = Self { category, size };
        if key.file_name() != name {
            return Err(bad());
        }
        Ok(key)
    }
}

/// Directory of comma-separated integer datasets.
#[derive(Clone, Debug)]
pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: DatasetKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Creates the directory and writes every dataset for `sizes`, but only
    /// when the directory is missing. Returns whether anything was generated.
    pub fn ensure_generated<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sizes: &[usize],
        max_value: Value,
    ) -> Result<bool> {
        if self.exists() {
            debug!(dir = %self.dir.display(), "dataset directory present, skipping generation");
            return Ok(false);
        }

        info!(dir = %self.dir.display(), sizes = sizes.len(), "generating datasets");
        self.generate(rng, sizes, max_value)?;
        Ok(true)
    }

    /// Writes all three categories for each size, overwriting existing files.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sizes: &[usize],
        max_value: Value,
    ) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| BenchError::io(&self.dir, e))?;

        for &size in sizes {
            let set = generate_set_with(rng, size, max_value);
            for (category, values) in set.iter() {
                self.write(DatasetKey::new(category, size), values)?;
            }
        }
        Ok(())
    }

    pub fn write(&self, key: DatasetKey, values: &[Value]) -> Result<()> {
        let path = self.path_for(key);
        let contents = format_values(values);
        fs::write(&path, contents).map_err(|e| BenchError::io(&path, e))?;
        debug!(file = %path.display(), len = values.len(), "wrote dataset");
        Ok(())
    }

    pub fn load(&self, key: DatasetKey) -> Result<Vec<Value>> {
        load_file(&self.path_for(key))
    }

    /// Every dataset file in the directory, sorted by key. Files with other
    /// names are ignored.
    pub fn list(&self) -> Result<Vec<DatasetKey>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| BenchError::io(&self.dir, e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BenchError::io(&self.dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            match DatasetKey::parse_file_name(name) {
                Ok(key) => keys.push(key),
                Err(_) => debug!(file = name, "ignoring non-dataset file"),
            }
        }

        keys.sort();
        Ok(keys)
    }
}

pub fn format_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses comma-separated integers. Surrounding whitespace is tolerated and
/// blank content yields an empty dataset.
pub fn parse_values(text: &str, path: &Path) -> Result<Vec<Value>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<Value>().map_err(|source| BenchError::Parse {
                path: path.to_path_buf(),
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

pub fn load_file(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    parse_values(&text, path)
}
