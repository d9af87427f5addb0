// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that writes results to disk:
//
//   writer.rs   — the four split files (X_train, X_test,
//                 y_train, y_test) in the output directory
//
//   manifest.rs — optional split_manifest.json recording the
//                 input, seed, test size and per-label counts
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Delimited output of the four subsets
pub mod writer;

/// JSON record of how a split was produced
pub mod manifest;
