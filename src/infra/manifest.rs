// ============================================================
// Layer 6 — Split Manifest
// ============================================================
// Optional JSON record of how a split was produced, written
// next to the four data files:
//
//   <output_dir>/split_manifest.json
//
// With the manifest on hand, anyone can tell which input, seed
// and test size produced a given X_train / X_test pair, and
// check the per-label counts without re-reading the CSVs.
//
// Example:
//   {
//     "input_path": "data/your_dataset.csv",
//     "seed": 42,
//     "test_size": 0.2,
//     "total_rows": 100,
//     "train_rows": 80,
//     "test_rows": 20,
//     "classes": [
//       { "label": "A", "train": 64, "test": 16 },
//       { "label": "B", "train": 16, "test": 4 }
//     ]
//   }
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::table::{ClassCount, SplitResult};

pub const MANIFEST_FILE: &str = "split_manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitManifest {
    pub input_path: String,
    pub seed:       u64,
    pub test_size:  f64,
    pub total_rows: usize,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub classes:    Vec<ClassCount>,
}

impl SplitManifest {
    pub fn new(input_path: impl Into<String>, seed: u64, test_size: f64, split: &SplitResult) -> Self {
        Self {
            input_path: input_path.into(),
            seed,
            test_size,
            total_rows: split.n_train() + split.n_test(),
            train_rows: split.n_train(),
            test_rows:  split.n_test(),
            classes:    split.class_counts(),
        }
    }

    /// Write the manifest as pretty JSON into `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved split manifest to '{}'", path.display());
        Ok(path)
    }

    /// Read a manifest previously written by `save`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }
}
