// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads a delimited text file into a Dataset.
//
// File layout expected:
//   line 1    header row, one name per column
//   line 2..  one record per line, same width as the header
//
// The LAST column is the label, every column before it is a
// feature. Beyond a consistent width there is no schema check:
// cells stay as text.
//
// Failures:
//   missing file              → DataError::NotFound
//   empty / ragged / bad quote → DataError::Parse
//   anything else from the OS → DataError::Io
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::data::delimited::{parse_records, Record};
use crate::domain::error::DataError;
use crate::domain::table::Dataset;
use crate::domain::traits::TableSource;

/// Loads a labelled dataset from one delimited text file.
/// Implements the TableSource trait from Layer 3.
pub struct DelimitedLoader {
    path:      PathBuf,
    delimiter: char,
}

impl DelimitedLoader {
    pub fn new(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self { path: path.into(), delimiter }
    }

    fn parse_error(&self, line: usize, reason: impl Into<String>) -> DataError {
        DataError::Parse {
            path:   self.path.clone(),
            line,
            reason: reason.into(),
        }
    }
}

impl TableSource for DelimitedLoader {
    fn load(&self) -> Result<Dataset, DataError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                self.parse_error(1, "file is not valid UTF-8")
            } else {
                DataError::from_io(&self.path, e)
            }
        })?;

        // Spreadsheet exports often start with a UTF-8 byte order mark
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut records = parse_records(text, self.delimiter)
            .map_err(|e| self.parse_error(e.line, e.reason))?
            .into_iter();

        let header = records
            .next()
            .ok_or_else(|| self.parse_error(1, "file is empty, expected a header row"))?;

        let width = header.fields.len();
        if width < 2 {
            return Err(self.parse_error(
                header.line,
                format!(
                    "found {width} column(s), need at least one feature column and one label column"
                ),
            ));
        }

        let rows = records
            .map(|Record { line, fields }| {
                if fields.len() == width {
                    Ok(fields)
                } else {
                    Err(self.parse_error(
                        line,
                        format!("expected {width} fields, found {}", fields.len()),
                    ))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let dataset = Dataset::from_columns(header.fields, rows)
            .ok_or_else(|| self.parse_error(header.line, "header row has no columns"))?;

        tracing::info!(
            "Loaded '{}': {} rows, {} feature columns, label '{}'",
            self.path.display(),
            dataset.n_rows(),
            dataset.features.columns.len(),
            dataset.labels.name,
        );

        Ok(dataset)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_loads_header_features_and_labels() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "age,height,class\n31,180,a\n45,165,b\n");

        let ds = DelimitedLoader::new(&path, ',').load().unwrap();
        assert_eq!(ds.features.columns, vec!["age", "height"]);
        assert_eq!(ds.features.rows, vec![vec!["31", "180"], vec!["45", "165"]]);
        assert_eq!(ds.labels.name, "class");
        assert_eq!(ds.labels.values, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DelimitedLoader::new(dir.path().join("nope.csv"), ',').load().unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
    }

    #[test]
    fn test_empty_file_is_a_parse_error() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "");
        let err  = DelimitedLoader::new(&path, ',').load().unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_ragged_row_reports_its_line() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "a,b,y\n1,2,x\n3,z\n");
        let err  = DelimitedLoader::new(&path, ',').load().unwrap_err();
        match err {
            DataError::Parse { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 3 fields, found 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_column_is_rejected() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "y\na\nb\n");
        let err  = DelimitedLoader::new(&path, ',').load().unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn test_byte_order_mark_is_not_part_of_the_header() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "\u{feff}x1,label\n1,a\n");
        let ds   = DelimitedLoader::new(&path, ',').load().unwrap();
        assert_eq!(ds.features.columns, vec!["x1"]);
        assert_eq!(ds.labels.name, "label");
    }

    #[test]
    fn test_header_only_gives_empty_dataset() {
        let dir  = TempDir::new().unwrap();
        let path = write_input(&dir, "a,y\n");
        let ds   = DelimitedLoader::new(&path, ',').load().unwrap();
        assert_eq!(ds.n_rows(), 0);
        assert!(ds.labels.is_empty());
    }
}
