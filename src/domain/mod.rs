// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits describing what a split IS:
// the dataset, the four subsets, the ways it can fail, and the
// seams for reading and writing.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Typed failure classes shared by every layer
pub mod error;

/// Dataset, feature table, label column and split result
pub mod table;

/// TableSource / SplitSink abstractions
pub mod traits;
