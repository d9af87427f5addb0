// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// From a file on disk to the four split subsets:
//
//   dataset file
//       │
//       ▼
//   DelimitedLoader    → parses records, peels off the label column
//       │
//       ▼
//   stratified_split   → seeded, label-preserving train/test assignment
//       │
//       ▼
//   SplitResult        → handed to the writer in Layer 6
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Record-level parsing and formatting of delimited text
pub mod delimited;

/// Loads a delimited file into a Dataset
pub mod loader;

/// Stratified, seeded train/test splitting
pub mod splitter;
