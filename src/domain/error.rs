// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Every way a split run can fail, as one typed enum.
//
// The lower layers (data, infra) return DataError so callers
// and tests can match on the exact failure class. The upper
// layers (application, cli) wrap it in anyhow with context.
//
// Failure classes:
//   (a) I/O      — NotFound, Parse, Io
//   (b) shape    — ShapeMismatch, EmptyDataset
//   (c) strata   — InsufficientClassPopulation,
//                  PartitionTooSmall, EmptyPartition
//   plus an invalid test fraction.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::table::Partition;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("parse error in '{path}' at line {line}: {reason}")]
    Parse {
        path:   PathBuf,
        line:   usize,
        reason: String,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset has no rows to split, only a header")]
    EmptyDataset,

    #[error("shape mismatch: feature table has {features} rows but label column has {labels}")]
    ShapeMismatch { features: usize, labels: usize },

    /// Stratification error: a class has too few members to appear on both sides.
    #[error(
        "insufficient class population: label '{label}' has only {count} member(s), \
         at least 2 are required for a stratified split"
    )]
    InsufficientClassPopulation { label: String, count: usize },

    #[error(
        "{partition} partition would hold {size} row(s), fewer than the {classes} \
         distinct labels it must represent"
    )]
    PartitionTooSmall {
        partition: Partition,
        size:      usize,
        classes:   usize,
    },

    #[error("test size {0} is invalid, it must lie strictly between 0 and 1")]
    InvalidTestSize(f64),

    #[error("{partition} partition would be empty with this test size")]
    EmptyPartition { partition: Partition },
}

impl DataError {
    /// Map a std I/O error onto NotFound or Io depending on its kind.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            DataError::NotFound { path }
        } else {
            DataError::Io { path, source }
        }
    }

    /// True for the stratification failure classes.
    pub fn is_stratification(&self) -> bool {
        matches!(
            self,
            DataError::InsufficientClassPopulation { .. }
                | DataError::PartitionTooSmall { .. }
                | DataError::EmptyPartition { .. }
        )
    }
}
