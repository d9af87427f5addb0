// ============================================================
// Layer 3 — Tabular Domain Types
// ============================================================
// The in-memory shape of a dataset:
//
//   FeatureTable  — named feature columns, one Vec<String> per row
//   LabelColumn   — one named column, one value per row
//   Dataset       — a feature table and its aligned label column
//   SplitResult   — the four subsets produced by the splitter
//
// Cells are kept as the raw strings read from disk. The split
// never interprets feature values, and labels are compared by
// their exact text, so there is nothing to gain from parsing.
//
// Row correspondence is positional: row i of the features
// belongs to entry i of the labels.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the split a row ends up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Train,
    Test,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Train => write!(f, "train"),
            Partition::Test  => write!(f, "test"),
        }
    }
}

/// Feature columns of a dataset, excluding the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTable {
    pub columns: Vec<String>,
    pub rows:    Vec<Vec<String>>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Copy out the rows at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows:    indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// The target column used for stratification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelColumn {
    pub name:   String,
    pub values: Vec<String>,
}

impl LabelColumn {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            name:   self.name.clone(),
            values: indices.iter().map(|&i| self.values[i].clone()).collect(),
        }
    }

    /// Number of rows per distinct label, ordered by label text.
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.values {
            *counts.entry(v.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// A full dataset: the last input column is the label,
/// every column before it is a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub features: FeatureTable,
    pub labels:   LabelColumn,
}

impl Dataset {
    /// Build a dataset from a header and rows, peeling off the last
    /// column as the label. Every row must already be as wide as
    /// the header. Returns None for an empty header.
    pub fn from_columns(mut header: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        let label_name = header.pop()?;

        let mut feature_rows = Vec::with_capacity(rows.len());
        let mut label_values = Vec::with_capacity(rows.len());
        for mut row in rows {
            let label = row.pop().unwrap_or_default();
            feature_rows.push(row);
            label_values.push(label);
        }

        Some(Self {
            features: FeatureTable::new(header, feature_rows),
            labels:   LabelColumn::new(label_name, label_values),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.features.n_rows()
    }
}

/// Per-label row counts on each side of a finished split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub label: String,
    pub train: usize,
    pub test:  usize,
}

/// The four subsets produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub x_train: FeatureTable,
    pub x_test:  FeatureTable,
    pub y_train: LabelColumn,
    pub y_test:  LabelColumn,
}

impl SplitResult {
    pub fn n_train(&self) -> usize {
        self.y_train.len()
    }

    pub fn n_test(&self) -> usize {
        self.y_test.len()
    }

    /// Train/test counts per label, ordered by label text.
    pub fn class_counts(&self) -> Vec<ClassCount> {
        let train = self.y_train.class_counts();
        let test  = self.y_test.class_counts();

        let mut labels: Vec<&str> = train.keys().chain(test.keys()).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        labels
            .into_iter()
            .map(|label| ClassCount {
                label: label.to_string(),
                train: train.get(label).copied().unwrap_or(0),
                test:  test.get(label).copied().unwrap_or(0),
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_last_column_becomes_label() {
        let ds = Dataset::from_columns(
            strings(&["a", "b", "target"]),
            vec![strings(&["1", "2", "x"]), strings(&["3", "4", "y"])],
        )
        .unwrap();
        assert!(Dataset::from_columns(vec![], vec![]).is_none());

        assert_eq!(ds.features.columns, strings(&["a", "b"]));
        assert_eq!(ds.features.rows[1], strings(&["3", "4"]));
        assert_eq!(ds.labels.name, "target");
        assert_eq!(ds.labels.values, strings(&["x", "y"]));
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let labels = LabelColumn::new("y", strings(&["a", "b", "c"]));
        assert_eq!(labels.select(&[2, 0]).values, strings(&["c", "a"]));
    }

    #[test]
    fn test_class_counts_merges_both_sides() {
        let result = SplitResult {
            x_train: FeatureTable::new(vec![], vec![vec![], vec![]]),
            x_test:  FeatureTable::new(vec![], vec![vec![]]),
            y_train: LabelColumn::new("y", strings(&["a", "a"])),
            y_test:  LabelColumn::new("y", strings(&["b"])),
        };

        let counts = result.class_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], ClassCount { label: "a".into(), train: 2, test: 0 });
        assert_eq!(counts[1], ClassCount { label: "b".into(), train: 0, test: 1 });
    }
}
