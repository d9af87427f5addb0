// ============================================================
// Layer 6 — Split Writer
// ============================================================
// Persists the four subsets of a split as delimited text files:
//
//   <output_dir>/
//     X_train.csv   ← feature header + training rows
//     X_test.csv    ← feature header + test rows
//     y_train.csv   ← label header + training labels
//     y_test.csv    ← label header + test labels
//
// No synthetic row index is written, only the data columns.
//
// A missing output directory is an error unless the writer was
// built with create_dir = true, in which case it is created
// (with parents, like `mkdir -p`) before anything is written.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::delimited::format_record;
use crate::domain::error::DataError;
use crate::domain::table::{FeatureTable, LabelColumn, SplitResult};
use crate::domain::traits::SplitSink;

pub const X_TRAIN_FILE: &str = "X_train.csv";
pub const X_TEST_FILE:  &str = "X_test.csv";
pub const Y_TRAIN_FILE: &str = "y_train.csv";
pub const Y_TEST_FILE:  &str = "y_test.csv";

/// Writes a SplitResult into one directory.
/// Implements the SplitSink trait from Layer 3.
pub struct SplitWriter {
    dir:        PathBuf,
    delimiter:  char,
    create_dir: bool,
}

impl SplitWriter {
    pub fn new(dir: impl Into<PathBuf>, delimiter: char, create_dir: bool) -> Self {
        Self {
            dir: dir.into(),
            delimiter,
            create_dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn prepare_dir(&self) -> Result<(), DataError> {
        if self.create_dir {
            return fs::create_dir_all(&self.dir).map_err(|source| DataError::Io {
                path: self.dir.clone(),
                source,
            });
        }

        if !self.dir.is_dir() {
            return Err(DataError::Io {
                path:   self.dir.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "output directory does not exist"),
            });
        }
        Ok(())
    }

    fn write_features(&self, name: &str, table: &FeatureTable) -> Result<PathBuf, DataError> {
        let rows = table.rows.iter().map(|r| format_record(r, self.delimiter));
        self.write_lines(name, format_record(&table.columns, self.delimiter), rows)
    }

    fn write_labels(&self, name: &str, labels: &LabelColumn) -> Result<PathBuf, DataError> {
        let rows = labels
            .values
            .iter()
            .map(|v| format_record(std::slice::from_ref(v), self.delimiter));
        self.write_lines(name, format_record(&[&labels.name], self.delimiter), rows)
    }

    fn write_lines(
        &self,
        name:   &str,
        header: String,
        rows:   impl Iterator<Item = String>,
    ) -> Result<PathBuf, DataError> {
        let path = self.dir.join(name);
        let io_err = |source: io::Error| DataError::Io { path: path.clone(), source };

        let mut out = BufWriter::new(File::create(&path).map_err(io_err)?);
        writeln!(out, "{header}").map_err(io_err)?;
        let mut written = 0usize;
        for row in rows {
            writeln!(out, "{row}").map_err(io_err)?;
            written += 1;
        }
        out.flush().map_err(io_err)?;

        tracing::debug!("Wrote {} rows to '{}'", written, path.display());
        Ok(path)
    }
}

impl SplitSink for SplitWriter {
    fn save(&self, split: &SplitResult) -> Result<Vec<PathBuf>, DataError> {
        self.prepare_dir()?;

        let paths = vec![
            self.write_features(X_TRAIN_FILE, &split.x_train)?,
            self.write_features(X_TEST_FILE, &split.x_test)?,
            self.write_labels(Y_TRAIN_FILE, &split.y_train)?,
            self.write_labels(Y_TEST_FILE, &split.y_test)?,
        ];

        tracing::info!("Saved split files to '{}'", self.dir.display());
        Ok(paths)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::delimited::parse_records;
    use tempfile::TempDir;

    fn sample_split() -> SplitResult {
        let cols = vec!["a".to_string(), "note".to_string()];
        SplitResult {
            x_train: FeatureTable::new(
                cols.clone(),
                vec![
                    vec!["1".into(), "plain".into()],
                    vec!["2".into(), "has, comma".into()],
                ],
            ),
            x_test:  FeatureTable::new(cols, vec![vec!["3".into(), "x".into()]]),
            y_train: LabelColumn::new("label", vec!["p".into(), "q".into()]),
            y_test:  LabelColumn::new("label", vec!["p".into()]),
        }
    }

    #[test]
    fn test_writes_four_files_without_index() {
        let dir   = TempDir::new().unwrap();
        let paths = SplitWriter::new(dir.path(), ',', false).save(&sample_split()).unwrap();
        assert_eq!(paths.len(), 4);

        let x_train = fs::read_to_string(dir.path().join(X_TRAIN_FILE)).unwrap();
        assert_eq!(x_train, "a,note\n1,plain\n2,\"has, comma\"\n");

        let x_test = fs::read_to_string(dir.path().join(X_TEST_FILE)).unwrap();
        assert_eq!(x_test, "a,note\n3,x\n");

        let y_train = fs::read_to_string(dir.path().join(Y_TRAIN_FILE)).unwrap();
        assert_eq!(y_train, "label\np\nq\n");

        let y_test = fs::read_to_string(dir.path().join(Y_TEST_FILE)).unwrap();
        assert_eq!(y_test, "label\np\n");
    }

    #[test]
    fn test_missing_dir_is_an_io_error() {
        let dir    = TempDir::new().unwrap();
        let target = dir.path().join("not").join("there");
        let err    = SplitWriter::new(&target, ',', false).save(&sample_split()).unwrap_err();

        assert!(matches!(err, DataError::Io { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_create_dir_makes_missing_parents() {
        let dir    = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("out");
        SplitWriter::new(&target, ',', true).save(&sample_split()).unwrap();

        assert!(target.join(Y_TEST_FILE).is_file());
    }

    #[test]
    fn test_empty_cells_keep_their_rows() {
        let dir   = TempDir::new().unwrap();
        let split = SplitResult {
            x_train: FeatureTable::new(
                vec!["f".into()],
                vec![vec!["".into()], vec!["1".into()], vec!["".into()]],
            ),
            x_test:  FeatureTable::new(vec!["f".into()], vec![vec!["2".into()]]),
            y_train: LabelColumn::new("y", vec!["a".into(), "".into(), "a".into()]),
            y_test:  LabelColumn::new("y", vec!["".into()]),
        };
        SplitWriter::new(dir.path(), ',', false).save(&split).unwrap();

        let y_train = fs::read_to_string(dir.path().join(Y_TRAIN_FILE)).unwrap();
        assert_eq!(y_train, "y\na\n\"\"\na\n");

        for (name, rows) in [(X_TRAIN_FILE, 3), (Y_TRAIN_FILE, 3), (X_TEST_FILE, 1), (Y_TEST_FILE, 1)] {
            let text    = fs::read_to_string(dir.path().join(name)).unwrap();
            let records = parse_records(&text, ',').unwrap();
            assert_eq!(records.len(), rows + 1, "{name} lost rows on read-back");
        }
    }

    #[test]
    fn test_honours_delimiter() {
        let dir = TempDir::new().unwrap();
        SplitWriter::new(dir.path(), ';', false).save(&sample_split()).unwrap();

        let x_train = fs::read_to_string(dir.path().join(X_TRAIN_FILE)).unwrap();
        assert_eq!(x_train, "a;note\n1;plain\n2;has, comma\n");
    }
}
