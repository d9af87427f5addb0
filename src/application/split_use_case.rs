// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs the whole job, one step after another:
//
//   Step 1: Load the dataset         (Layer 4 - data)
//   Step 2: Stratified split         (Layer 4 - data)
//   Step 3: Save the four subsets    (Layer 6 - infra)
//   Step 4: Save the manifest        (Layer 6 - infra, optional)
//
// Every check on the data happens in step 2, before a single
// output file is opened, so a failed run leaves the output
// directory untouched.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::DelimitedLoader,
    splitter::{stratified_split, DEFAULT_SEED, DEFAULT_TEST_SIZE},
};
use crate::domain::table::SplitResult;
use crate::domain::traits::{SplitSink, TableSource};
use crate::infra::{manifest::SplitManifest, writer::SplitWriter};

pub const DEFAULT_INPUT_PATH: &str = "data/your_dataset.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "data/";

// ─── SplitConfig ──────────────────────────────────────────────────────────────
// Everything a run needs. Serialize/Deserialize let the config
// be logged or stored alongside the output if needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input_path:        String,
    pub output_dir:        String,
    pub test_size:         f64,
    pub seed:              u64,
    pub delimiter:         char,
    pub create_output_dir: bool,
    pub write_manifest:    bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_path:        DEFAULT_INPUT_PATH.to_string(),
            output_dir:        DEFAULT_OUTPUT_DIR.to_string(),
            test_size:         DEFAULT_TEST_SIZE,
            seed:              DEFAULT_SEED,
            delimiter:         ',',
            create_output_dir: false,
            write_manifest:    false,
        }
    }
}

/// What a finished run produced.
#[derive(Debug)]
pub struct SplitOutcome {
    pub split: SplitResult,
    pub files: Vec<PathBuf>,
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Load, split and save using the delimited-file loader and writer.
    pub fn execute(&self) -> Result<SplitOutcome> {
        let cfg = &self.config;

        let loader = DelimitedLoader::new(&cfg.input_path, cfg.delimiter);
        let writer = SplitWriter::new(&cfg.output_dir, cfg.delimiter, cfg.create_output_dir);

        let split     = split_with(&loader, cfg.test_size, cfg.seed)?;
        let mut files = save_with(&writer, &split)?;

        if cfg.write_manifest {
            let manifest = SplitManifest::new(&cfg.input_path, cfg.seed, cfg.test_size, &split);
            files.push(manifest.save(writer.dir())?);
        }

        Ok(SplitOutcome { split, files })
    }
}

/// Steps 1 and 2 against any TableSource.
pub fn split_with(source: &dyn TableSource, test_size: f64, seed: u64) -> Result<SplitResult> {
    let dataset = source.load().context("Failed to load dataset")?;

    let split = stratified_split(&dataset.features, &dataset.labels, test_size, seed)
        .context("Failed to split dataset")?;

    tracing::info!(
        "Split {} rows: {} train, {} test",
        dataset.n_rows(),
        split.n_train(),
        split.n_test(),
    );
    Ok(split)
}

/// Step 3 against any SplitSink.
pub fn save_with(sink: &dyn SplitSink, split: &SplitResult) -> Result<Vec<PathBuf>> {
    sink.save(split).context("Failed to save split")
}
