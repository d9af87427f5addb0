// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag is optional. With no flags at all the tool reads
// data/your_dataset.csv, holds out 20% with seed 42 and writes
// the four files into data/.
//
// clap's derive macros generate --help, the error messages for
// malformed values, and the string → f64 / u64 parsing. The
// delimiter goes through parse_delimiter so it cannot collide
// with the quote character or a line break.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;

use crate::application::split_use_case::{SplitConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use crate::data::splitter::{DEFAULT_SEED, DEFAULT_TEST_SIZE};

/// Arguments for a split run.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Delimited text file to split; the last column is the label
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Directory that receives X_train, X_test, y_train and y_test
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Fraction of rows held out for testing, strictly between 0 and 1
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Seed for the row assignment; same seed, same split
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Field separator used for both input and output
    #[arg(long, default_value_t = ',', value_parser = parse_delimiter)]
    pub delimiter: char,

    /// Create the output directory (and parents) if it is missing
    #[arg(long)]
    pub create_output_dir: bool,

    /// Also write split_manifest.json with the seed and per-label counts
    #[arg(long)]
    pub manifest: bool,
}

/// Exactly one character, and not one the quoting rules reserve.
fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('"'), None) => Err("the double quote is reserved for quoting".to_string()),
        (Some('\n' | '\r'), None) => Err("a line break cannot separate fields".to_string()),
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{s}'")),
    }
}

/// Convert CLI SplitArgs into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input_path:        a.input,
            output_dir:        a.output_dir,
            test_size:         a.test_size,
            seed:              a.seed,
            delimiter:         a.delimiter,
            create_output_dir: a.create_output_dir,
            write_manifest:    a.manifest,
        }
    }
}
