// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can abort a run.
#[derive(Error, Debug)]
pub enum VaryError {
    /// Input missing, unreadable, or not parseable as CSV.
    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A monthly column holds a cell that is not a finite number.
    #[error("column '{column}' row {row}: {value:?} is not numeric")]
    Conversion {
        column: String,
        /// 1-based data row (the header is not counted)
        row: usize,
        value: String,
    },

    /// Rebuilding a record batch failed, or a column reached the noise step
    /// without being declared numeric first.
    #[error("failed to assemble table: {0}")]
    Assemble(#[from] arrow::error::ArrowError),

    /// Output could not be encoded, created, or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl VaryError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        VaryError::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        VaryError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}
