// ============================================================
// Layer 4 — Stratified Train/Test Splitter
// ============================================================
// Splits a feature table and its label column into:
//   - Training set: X_train, y_train
//   - Test set:     X_test,  y_test
//
// Stratified means every label keeps (as near as whole rows
// allow) the same share of rows in the test set as it has in
// the full dataset. With labels {A: 80, B: 20} and a 0.2 test
// size the test set gets 16 A rows and 4 B rows.
//
// Sticky means the assignment depends only on the input, the
// test size and the seed. Same three in → same split out, on
// every run and every platform. ChaCha8Rng is used because its
// output stream is fixed by its algorithm, unlike StdRng which
// may change between rand releases.
//
// Steps:
//   1. Validate test size, row counts and class populations
//   2. Size the partitions: n_test = round(R × test_size)
//   3. Allocate train rows per class (largest remainder)
//   4. Shuffle each class, cut it at its train allocation
//   5. Shuffle each partition and copy the rows out
//
// Reference: rand / rand_chacha crate documentation
//            Rust Book §8 (Collections)

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::error::DataError;
use crate::domain::table::{FeatureTable, LabelColumn, Partition, SplitResult};

/// Fraction of rows sent to the test partition when none is given
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Seed used when none is given, so runs are reproducible out of the box
pub const DEFAULT_SEED: u64 = 42;

/// Stratified, seeded split of `features` / `labels` into
/// (X_train, X_test, y_train, y_test).
///
/// # Errors
/// * `InvalidTestSize`              - test_size not strictly inside (0, 1)
/// * `ShapeMismatch`                - row counts of features and labels differ
/// * `EmptyDataset`                 - there are no rows at all
/// * `InsufficientClassPopulation`  - some label occurs fewer than 2 times
/// * `EmptyPartition`               - test_size rounds to an empty side
/// * `PartitionTooSmall`            - a side has fewer rows than there are labels
///
/// # Example
/// ```ignore
/// let split = stratified_split(&ds.features, &ds.labels, 0.2, 42)?;
/// // split.n_test() == round(0.2 × rows)
/// ```
pub fn stratified_split(
    features:  &FeatureTable,
    labels:    &LabelColumn,
    test_size: f64,
    seed:      u64,
) -> Result<SplitResult, DataError> {
    let (train_idx, test_idx) = stratified_indices(features, labels, test_size, seed)?;

    let split = SplitResult {
        x_train: features.select(&train_idx),
        x_test:  features.select(&test_idx),
        y_train: labels.select(&train_idx),
        y_test:  labels.select(&test_idx),
    };

    tracing::debug!(
        "Split computed: {} train, {} test (test_size={}, seed={})",
        split.n_train(),
        split.n_test(),
        test_size,
        seed,
    );
    for c in split.class_counts() {
        tracing::debug!("  label '{}': {} train, {} test", c.label, c.train, c.test);
    }

    Ok(split)
}

/// Row indices for each side of the split, in output order.
pub fn stratified_indices(
    features:  &FeatureTable,
    labels:    &LabelColumn,
    test_size: f64,
    seed:      u64,
) -> Result<(Vec<usize>, Vec<usize>), DataError> {
    if !test_size.is_finite() || test_size <= 0.0 || test_size >= 1.0 {
        return Err(DataError::InvalidTestSize(test_size));
    }

    let n_rows = features.n_rows();
    if n_rows != labels.len() {
        return Err(DataError::ShapeMismatch {
            features: n_rows,
            labels:   labels.len(),
        });
    }
    if n_rows == 0 {
        return Err(DataError::EmptyDataset);
    }

    // ── Step 1: Group row indices by label ───────────────────────────────────
    // BTreeMap gives a stable class order, which keeps the RNG
    // draws (and so the split) independent of hash seeds.
    let mut classes: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, label) in labels.values.iter().enumerate() {
        classes.entry(label.as_str()).or_default().push(i);
    }

    if let Some((label, rows)) = classes.iter().find(|(_, rows)| rows.len() < 2) {
        return Err(DataError::InsufficientClassPopulation {
            label: label.to_string(),
            count: rows.len(),
        });
    }

    // ── Step 2: Partition sizes ──────────────────────────────────────────────
    let n_test  = ((n_rows as f64) * test_size).round() as usize;
    let n_train = n_rows - n_test;
    let n_classes = classes.len();

    for (partition, size) in [(Partition::Train, n_train), (Partition::Test, n_test)] {
        if size == 0 {
            return Err(DataError::EmptyPartition { partition });
        }
        if size < n_classes {
            return Err(DataError::PartitionTooSmall {
                partition,
                size,
                classes: n_classes,
            });
        }
    }

    // ── Step 3: How many rows of each class go to train ──────────────────────
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let counts: Vec<usize> = classes.values().map(Vec::len).collect();
    let train_alloc = allocate(&counts, n_train, &mut rng);

    // ── Step 4: Cut each shuffled class at its allocation ────────────────────
    let mut train_idx = Vec::with_capacity(n_train);
    let mut test_idx  = Vec::with_capacity(n_test);

    for (mut rows, take) in classes.into_values().zip(train_alloc) {
        rows.shuffle(&mut rng);
        let (train, test) = rows.split_at(take);
        train_idx.extend_from_slice(train);
        test_idx.extend_from_slice(test);
    }

    // ── Step 5: Mix the classes within each side ─────────────────────────────
    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    Ok((train_idx, test_idx))
}

/// Spread `total` rows across classes in proportion to `counts`.
///
/// Each class first gets the floor of its exact share. The rows
/// left over go one each to the classes with the largest
/// fractional remainders; equal remainders are ordered by `rng`.
/// Finally every class is nudged so it keeps at least one row on
/// each side, which is always possible once every class has two
/// or more rows and `total` lies in [classes, rows - classes].
fn allocate(counts: &[usize], total: usize, rng: &mut ChaCha8Rng) -> Vec<usize> {
    let n: usize = counts.iter().sum();
    let exact: Vec<f64> = counts
        .iter()
        .map(|&c| c as f64 * total as f64 / n as f64)
        .collect();

    let mut alloc: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let assigned: usize = alloc.iter().sum();
    let mut left = total.saturating_sub(assigned);

    // Shuffle first, then a stable sort: ties stay in shuffled order
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.shuffle(rng);
    order.sort_by(|&a, &b| {
        let ra = exact[a] - alloc[a] as f64;
        let rb = exact[b] - alloc[b] as f64;
        rb.total_cmp(&ra)
    });

    for &i in &order {
        if left == 0 {
            break;
        }
        if alloc[i] < counts[i] {
            alloc[i] += 1;
            left -= 1;
        }
    }

    // A class with no train rows takes one from the class furthest above its share
    for i in 0..counts.len() {
        if alloc[i] == 0 {
            if let Some(donor) = pick(&exact, &alloc, |j| alloc[j] >= 2, true) {
                alloc[donor] -= 1;
                alloc[i] += 1;
            }
        }
    }

    // A class with no test rows hands one train row to the class furthest below its share
    for i in 0..counts.len() {
        if alloc[i] == counts[i] {
            if let Some(taker) = pick(&exact, &alloc, |j| counts[j] - alloc[j] >= 2, false) {
                alloc[i] -= 1;
                alloc[taker] += 1;
            }
        }
    }

    alloc
}

/// Among classes passing `eligible`, the one whose allocation is
/// furthest above (`above`) or below its exact share.
fn pick(
    exact:    &[f64],
    alloc:    &[usize],
    eligible: impl Fn(usize) -> bool,
    above:    bool,
) -> Option<usize> {
    (0..alloc.len())
        .filter(|&j| eligible(j))
        .max_by(|&a, &b| {
            let da = alloc[a] as f64 - exact[a];
            let db = alloc[b] as f64 - exact[b];
            if above { da.total_cmp(&db) } else { db.total_cmp(&da) }
        })
}
