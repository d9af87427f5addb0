// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands a SplitConfig to Layer 2,
// and prints the one completion line. Nothing else happens
// here: no file access, no splitting.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::SplitArgs;

use crate::application::split_use_case::SplitUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "sticky-split",
    version,
    about = "Reproducible, label-stratified train/test split of a delimited dataset."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SplitArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        tracing::info!(
            "Splitting '{}' into '{}' (test_size={}, seed={})",
            self.args.input,
            self.args.output_dir,
            self.args.test_size,
            self.args.seed,
        );

        let outcome = SplitUseCase::new(self.args.into()).execute()?;
        for c in outcome.split.class_counts() {
            tracing::info!("  label '{}': {} train, {} test", c.label, c.train, c.test);
        }
        for path in &outcome.files {
            tracing::debug!("Wrote '{}'", path.display());
        }

        println!("Data has been split and saved successfully.");
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::SplitConfig;

    #[test]
    fn test_no_flags_gives_fixed_defaults() {
        let cli = Cli::try_parse_from(["sticky-split"]).unwrap();
        let cfg: SplitConfig = cli.args.into();

        assert_eq!(cfg.input_path, "data/your_dataset.csv");
        assert_eq!(cfg.output_dir, "data/");
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.delimiter, ',');
        assert!(!cfg.create_output_dir);
        assert!(!cfg.write_manifest);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sticky-split",
            "--input", "in.tsv",
            "--output-dir", "out",
            "--test-size", "0.3",
            "--seed", "7",
            "--delimiter", ";",
            "--create-output-dir",
            "--manifest",
        ])
        .unwrap();
        let cfg: SplitConfig = cli.args.into();

        assert_eq!(cfg.input_path, "in.tsv");
        assert_eq!(cfg.output_dir, "out");
        assert_eq!(cfg.test_size, 0.3);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.delimiter, ';');
        assert!(cfg.create_output_dir);
        assert!(cfg.write_manifest);
    }

    #[test]
    fn test_tab_delimiter_is_accepted() {
        let cli = Cli::try_parse_from(["sticky-split", "--delimiter", "\t"]).unwrap();
        assert_eq!(cli.args.delimiter, '\t');
    }

    #[test]
    fn test_reserved_or_long_delimiters_are_rejected() {
        for bad in ["\"", "\n", "\r", "ab", ""] {
            assert!(
                Cli::try_parse_from(["sticky-split", "--delimiter", bad]).is_err(),
                "delimiter {bad:?} was accepted"
            );
        }
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Cli::try_parse_from(["sticky-split", "--seed", "-1"]).is_err());
    }
}
