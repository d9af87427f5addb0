// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams around the splitter:
//
//   TableSource — something that produces a Dataset
//   SplitSink   — something that persists a SplitResult
//
// The use case in Layer 2 only sees these traits, so the
// delimited-file loader and writer can be swapped for other
// formats (or in-memory fakes in tests) without touching
// the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::PathBuf;

use crate::domain::error::DataError;
use crate::domain::table::{Dataset, SplitResult};

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Any component that can load a labelled dataset.
///
/// Implementations:
///   - DelimitedLoader → reads a delimited text file
pub trait TableSource {
    fn load(&self) -> Result<Dataset, DataError>;
}

// ─── SplitSink ────────────────────────────────────────────────────────────────
/// Any component that can persist the four split subsets.
///
/// Implementations:
///   - SplitWriter → writes four delimited files into a directory
pub trait SplitSink {
    /// Persist the split and return the paths that were written.
    fn save(&self, split: &SplitResult) -> Result<Vec<PathBuf>, DataError>;
}
