use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing, loading or reporting benchmark datasets.
///
/// The sort itself never fails; everything here comes from the file system
/// or from malformed dataset content.
#[derive(Error, Debug)]
pub enum BenchError {
    /// File system access failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file contains something that is not an integer
    #[error("malformed value {token:?} in {}", .path.display())]
    Parse {
        path: PathBuf,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Category name outside random/sorted/reverse_sorted
    #[error("unknown dataset category: {0}")]
    UnknownCategory(String),

    /// File name not of the form `<category>_<size>.txt`
    #[error("not a dataset file name: {0}")]
    BadFileName(String),

    /// Size sweep that cannot produce any sizes
    #[error("invalid size sweep: {0}")]
    InvalidSweep(String),
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
